use chrono::NaiveDate;
use shelfwatch_test_utils::prelude::*;

use crate::data::ledger::price::{PriceCapture, PriceRepository};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

mod get;
mod get_last_in_network;
