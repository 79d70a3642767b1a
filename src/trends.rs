use crate::models::{CustomerMetrics, TrendDeltas};

pub fn calculate_trends(metrics: &CustomerMetrics) -> TrendDeltas {
    TrendDeltas {
        usage: metrics.usage_per_week - metrics.usage_prev_period,
        tickets: metrics.open_tickets - metrics.open_tickets_prev_period,
        nps: metrics.nps - metrics.nps_prev_period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_metrics;

    #[test]
    fn deltas_are_current_minus_previous() {
        let trends = calculate_trends(&CustomerMetrics {
            usage_per_week: 3.5,
            usage_prev_period: 5.0,
            open_tickets: 4,
            open_tickets_prev_period: 1,
            nps: 7.0,
            nps_prev_period: 7.0,
            ..sample_metrics()
        });
        assert_eq!(trends.usage, -1.5);
        assert_eq!(trends.tickets, 3);
        assert_eq!(trends.nps, 0.0);
    }

    #[test]
    fn negative_deltas_are_not_clamped() {
        let trends = calculate_trends(&CustomerMetrics {
            open_tickets: 0,
            open_tickets_prev_period: 9,
            nps: 2.0,
            nps_prev_period: 10.0,
            ..sample_metrics()
        });
        assert_eq!(trends.tickets, -9);
        assert_eq!(trends.nps, -8.0);
    }

    #[test]
    fn unchanged_metrics_produce_zero_deltas() {
        let trends = calculate_trends(&sample_metrics());
        assert_eq!(
            trends,
            TrendDeltas {
                usage: 0.0,
                tickets: 0,
                nps: 0.0
            }
        );
    }
}
