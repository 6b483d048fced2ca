//! Built-in reference datasets.
//!
//! Survey data for lines 74 and 75 along the third ring of Santa Cruz
//! de la Sierra, collected at the same eight checkpoints on the inner
//! and outer carriageways. Exposed as a plain value so tests and
//! callers can substitute their own pair.

use super::line::{LineDataset, LineId, LinePair};

impl LinePair {
    /// The built-in survey data for both lines.
    pub fn reference() -> Self {
        Self {
            line74: line_74(),
            line75: line_75(),
        }
    }
}

fn line_74() -> LineDataset {
    LineDataset {
        id: LineId::Line74,
        stop_names: [
            "Av. Virgen de Cotoca 3er anillo interno",
            "Av. Virgen de Cotoca 3er anillo interno _ Hospital Japones",
            "Hospital Japones _ Mercado Mutualista 3er anillo interno",
            "Mercado Mutualista _ Av. Banzer 3er anillo interno",
            "Av. Banzer 3er anillo interno _ Utepsa",
            "Utepsa _ Mercado Abasto antiguo 3er anillo interno",
            "Mercado Abasto antiguo 3er anillo interno _ Av. Grigota",
            "Av. Grigota 3er anillo interno _ Av. Santos Dumont",
        ]
        .map(str::to_owned),
        inter_stop_times: [0.0, 5.0, 6.0, 8.0, 6.0, 18.0, 2.0, 9.0],
        cumulative_times: [0.0, 5.0, 11.0, 19.0, 25.0, 43.0, 45.0, 54.0],
        distances: [0.0, 1.1, 2.7, 4.8, 7.6, 12.1, 13.3, 15.9],
        passengers: [15, 13, 14, 20, 13, 18, 21, 16],
        segment_costs: [0.0, 1.65, 2.39, 3.14, 4.19, 6.73, 1.80, 3.89],
    }
}

fn line_75() -> LineDataset {
    LineDataset {
        id: LineId::Line75,
        stop_names: [
            "Av. Virgen de Cotoca 3er anillo externo",
            "Av. Virgen de Cotoca 3er anillo externo _ Hospital Japones",
            "Hospital Japones _ Mercado Mutualista 3er anillo externo",
            "Mercado Mutualista _ Av. Banzer 3er anillo externo",
            "Av. Banzer 3er anillo externo _ UPDS",
            "UPDS _ Mercado Abasto antiguo 3er anillo externo",
            "Mercado Abasto antiguo 3er anillo externo _ Av. Grigota",
            "Av. Grigota 3er anillo externo _ Av. Santos Dumont",
        ]
        .map(str::to_owned),
        inter_stop_times: [0.0, 10.0, 8.0, 18.0, 23.0, 20.0, 22.0, 26.0],
        cumulative_times: [0.0, 10.0, 18.0, 36.0, 59.0, 79.0, 101.0, 127.0],
        distances: [0.0, 1.2, 2.7, 5.6, 7.7, 14.9, 17.7, 23.4],
        passengers: [2, 8, 17, 22, 20, 27, 32, 37],
        segment_costs: [0.0, 1.80, 2.24, 4.34, 3.14, 10.77, 4.19, 8.53],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FleetConfig, STOP_COUNT};
    use crate::validation::validate_dataset;

    #[test]
    fn test_reference_data_is_valid() {
        let pair = LinePair::reference();
        let config = FleetConfig::default();
        assert!(validate_dataset(&pair.line74, &config).is_ok());
        assert!(validate_dataset(&pair.line75, &config).is_ok());
    }

    #[test]
    fn test_cumulative_times_match_inter_stop_sums() {
        for line in [line_74(), line_75()] {
            let mut running = 0.0;
            for i in 0..STOP_COUNT {
                running += line.inter_stop_times[i];
                assert!(
                    (line.cumulative_times[i] - running).abs() < 1e-10,
                    "line {:?} stop {i}",
                    line.id
                );
            }
        }
    }

    #[test]
    fn test_reference_peak_within_capacity() {
        let pair = LinePair::reference();
        let config = FleetConfig::default();
        assert!(pair.line74.peak_load() <= config.capacity);
        assert!(pair.line75.peak_load() <= config.capacity);
    }
}
