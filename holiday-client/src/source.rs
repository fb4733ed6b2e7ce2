//! Holiday source abstraction

use async_trait::async_trait;

use crate::{HolidayClient, HolidaySet};

/// Anything that can supply the holiday set for a year
///
/// Implementations never fail; a source that cannot reach its data
/// degrades to whatever set it can still offer.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn holidays(&self, year: i32) -> HolidaySet;
}

#[async_trait]
impl HolidaySource for HolidayClient {
    async fn holidays(&self, year: i32) -> HolidaySet {
        self.get_holidays(year).await
    }
}

/// A fixed holiday list, for offline use and tests
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    holidays: HolidaySet,
}

impl StaticHolidays {
    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }
}

#[async_trait]
impl HolidaySource for StaticHolidays {
    async fn holidays(&self, year: i32) -> HolidaySet {
        let mut holidays = self.holidays.clone();
        holidays.retain_year(year);
        holidays
    }
}
