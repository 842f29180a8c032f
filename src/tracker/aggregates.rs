//! Today's earnings and courtesy totals over the paid orders.

use crate::model::Order;
use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregates {
    pub earnings: f64,
    pub courtesy_total: f64,
}

/// Sums the orders created on `today` in the local timezone.
pub fn compute_daily_aggregates<'a>(
    paid_orders: impl IntoIterator<Item = &'a Order>,
    today: NaiveDate,
) -> DailyAggregates {
    compute_daily_aggregates_in(paid_orders, today, &Local)
}

/// Same as [`compute_daily_aggregates`], with `today` read in `tz`.
///
/// Courtesy orders add to `courtesy_total`; every other order, including those with no
/// payment method, adds to `earnings`.
pub fn compute_daily_aggregates_in<'a, Tz: TimeZone>(
    paid_orders: impl IntoIterator<Item = &'a Order>,
    today: NaiveDate,
    tz: &Tz,
) -> DailyAggregates {
    paid_orders
        .into_iter()
        .filter(|order| created_on(order, today, tz))
        .fold(DailyAggregates::default(), |mut totals, order| {
            if order.is_courtesy() {
                totals.courtesy_total += order.total;
            } else {
                totals.earnings += order.total;
            }
            totals
        })
}

pub(crate) fn created_on<Tz: TimeZone>(order: &Order, day: NaiveDate, tz: &Tz) -> bool {
    order.created_at.with_timezone(tz).date_naive() == day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, OrderStatus, OrderType};
    use chrono::{DateTime, FixedOffset, Utc};

    fn paid(id: u32, total: f64, method: Option<&str>, created_at: DateTime<Utc>) -> Order {
        let mut order = Order::new(OrderId::from(id), "Ana", OrderType::Pickup, Vec::new(), created_at);
        order.status = OrderStatus::Paid;
        order.total = total;
        order.payment_method = method.map(str::to_string);
        order
    }

    fn noon_utc() -> DateTime<Utc> {
        "2026-03-10T12:00:00Z".parse().unwrap()
    }

    fn march_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn test_courtesy_split() {
        let orders = [
            paid(1, 10.0, Some("cash"), noon_utc()),
            paid(2, 20.0, Some("courtesy"), noon_utc()),
            paid(3, 30.0, Some("cash"), noon_utc()),
        ];
        let totals = compute_daily_aggregates_in(&orders, march_10(), &Utc);
        assert_eq!(totals.earnings, 40.0);
        assert_eq!(totals.courtesy_total, 20.0);
    }

    #[test]
    fn test_missing_method_counts_as_earnings() {
        let orders = [paid(1, 12.5, None, noon_utc()), paid(2, 4.0, Some(" COURTESY "), noon_utc())];
        let totals = compute_daily_aggregates_in(&orders, march_10(), &Utc);
        assert_eq!(totals.earnings, 12.5);
        assert_eq!(totals.courtesy_total, 4.0);
    }

    #[test]
    fn test_other_days_are_ignored() {
        let yesterday = noon_utc() - chrono::Duration::days(1);
        let orders = [paid(1, 10.0, Some("cash"), yesterday)];
        assert_eq!(
            compute_daily_aggregates_in(&orders, march_10(), &Utc),
            DailyAggregates::default()
        );
    }

    #[test]
    fn test_day_boundary_follows_timezone() {
        // 23:30 UTC on the 10th is already the 11th at UTC+2.
        let late: DateTime<Utc> = "2026-03-10T23:30:00Z".parse().unwrap();
        let orders = [paid(1, 10.0, Some("card"), late)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(compute_daily_aggregates_in(&orders, march_10(), &plus_two).earnings, 0.0);
        let march_11 = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
        assert_eq!(compute_daily_aggregates_in(&orders, march_11, &plus_two).earnings, 10.0);
    }

    #[test]
    fn test_empty_input() {
        let totals = compute_daily_aggregates(&[], march_10());
        assert_eq!(totals, DailyAggregates::default());
    }
}
