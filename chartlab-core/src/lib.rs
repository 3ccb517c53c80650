//! ChartLab Core — converts a bar series and a strategy run's trade history
//! into chart-ready data.
//!
//! This crate is the boundary layer between a backtesting engine and a
//! rendering surface:
//! - Domain types (bars, bar series, trades, trading records)
//! - Temporal bucketing with explicit minute/second granularity
//! - OHLC dataset builder (one record per bar, unbucketed)
//! - Indicator series builder (bucketed, deduplicated, named collision policy)
//! - Signal marker builder (buy/sell annotations per trade)
//! - Summary formatter (trade count + profit chart title)
//!
//! It produces plain serializable records and never draws pixels; strategy
//! logic, data loading, and rendering live in external collaborators.

pub mod chart;
pub mod domain;
pub mod indicators;
