//! Cálculo de tarifas del motor de rentas
//!
//! La tarifa base crece con el tiempo transcurrido (horas fraccionales)
//! y nunca baja del mínimo; los layanan adjuntados se suman aparte.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::config::environment::EnvironmentConfig;

const SECONDS_PER_HOUR: i64 = 3600;

/// Tarifas vigentes del sistema
#[derive(Debug, Clone)]
pub struct Tariff {
    pub rate_per_hour: Decimal,
    pub minimum_fee: Decimal,
}

impl Tariff {
    pub fn new(rate_per_hour: Decimal, minimum_fee: Decimal) -> Self {
        Self {
            rate_per_hour,
            minimum_fee,
        }
    }

    /// Tarifa base: max(minimum_fee, horas_transcurridas * rate_per_hour)
    pub fn base_fee(&self, elapsed: Duration) -> Decimal {
        let seconds = Decimal::from(elapsed.num_seconds().max(0));
        let hours = seconds / Decimal::from(SECONDS_PER_HOUR);
        let fee = (hours * self.rate_per_hour).round_dp(2);

        if fee < self.minimum_fee {
            self.minimum_fee
        } else {
            fee
        }
    }

    /// Costo final de una renta: tarifa base más la suma de los costos
    /// reales de los layanan adjuntados (política aditiva).
    pub fn total_cost(&self, elapsed: Duration, service_costs: &[Decimal]) -> Decimal {
        let services: Decimal = service_costs.iter().copied().sum();
        self.base_fee(elapsed) + services
    }
}

impl From<&EnvironmentConfig> for Tariff {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            rate_per_hour: config.rental_rate_per_hour,
            minimum_fee: config.rental_minimum_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tariff() -> Tariff {
        Tariff::new(Decimal::new(5000, 0), Decimal::new(5000, 0))
    }

    #[test]
    fn test_two_hours_with_two_services() {
        // max(5000, 2 * 5000) + 10000 + 15000 = 35000
        let total = tariff().total_cost(
            Duration::hours(2),
            &[Decimal::new(10000, 0), Decimal::new(15000, 0)],
        );
        assert_eq!(total, Decimal::new(35000, 0));
    }

    #[test]
    fn test_minimum_fee_applies_to_short_rentals() {
        let fee = tariff().base_fee(Duration::minutes(30));
        assert_eq!(fee, Decimal::new(5000, 0));

        let fee = tariff().base_fee(Duration::zero());
        assert_eq!(fee, Decimal::new(5000, 0));
    }

    #[test]
    fn test_fractional_hours() {
        // 1.5 horas * 5000 = 7500
        let fee = tariff().base_fee(Duration::minutes(90));
        assert_eq!(fee, Decimal::new(7500, 0));
    }

    #[test]
    fn test_monotonic_in_elapsed_time() {
        let t = tariff();
        let mut last = Decimal::ZERO;
        for hours in 1..=10 {
            let fee = t.base_fee(Duration::hours(hours));
            assert!(fee >= last);
            last = fee;
        }
    }

    #[test]
    fn test_monotonic_in_service_costs() {
        let t = tariff();
        let elapsed = Duration::hours(1);
        let without = t.total_cost(elapsed, &[]);
        let with_one = t.total_cost(elapsed, &[Decimal::new(10000, 0)]);
        let with_two = t.total_cost(elapsed, &[Decimal::new(10000, 0), Decimal::new(1, 0)]);
        assert!(with_one > without);
        assert!(with_two > with_one);
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        // Relojes desincronizados no deben producir tarifas negativas
        let fee = tariff().base_fee(Duration::hours(-3));
        assert_eq!(fee, Decimal::new(5000, 0));
    }
}
