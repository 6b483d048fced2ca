//! Delimited report export.
//!
//! Writes an [`OptimizationReport`] as comma-delimited text: one row
//! per stop per line, then a frequencies block, then an intersections
//! block. Values are taken verbatim from the report arrays so a
//! re-import of the stop rows reproduces them exactly.

use std::io;

use crate::models::{LineId, OptimizationReport, STOP_COUNT};

/// Writes the report to the given writer as comma-delimited text.
///
/// Stop rows carry `{line, stop number, name, inter-stop minutes,
/// cumulative minutes, distance km, passengers}` with 1-based stop
/// numbers matching the transfer-point labels.
pub fn write_report_csv<W: io::Write>(
    report: &OptimizationReport,
    writer: W,
) -> csv::Result<()> {
    let mut w = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    w.write_record([
        "line",
        "stop",
        "name",
        "interStopMinutes",
        "cumulativeMinutes",
        "distanceKm",
        "passengers",
    ])?;
    for id in LineId::ALL {
        let line = report.line(id);
        for i in 0..STOP_COUNT {
            w.write_record([
                id.label().to_owned(),
                (i + 1).to_string(),
                line.stop_names[i].clone(),
                line.inter_stop_times[i].to_string(),
                line.cumulative_times[i].to_string(),
                line.distances[i].to_string(),
                line.passenger_vector[i].to_string(),
            ])?;
        }
    }

    let frequencies = &report.frequencies;
    w.write_record(["frequencies"])?;
    for (name, value) in [
        ("f74", frequencies.f74),
        ("f75", frequencies.f75),
        ("costoTotal", frequencies.costo_total),
        ("costoActual", frequencies.costo_actual),
        ("ingresosTotales", frequencies.ingresos_totales),
        ("beneficio", frequencies.beneficio),
    ] {
        w.write_record([name.to_owned(), value.to_string()])?;
    }

    w.write_record(["intersections"])?;
    for intersection in &report.intersections {
        w.write_record([
            intersection.name.as_str(),
            intersection.stops[0].as_str(),
            intersection.stops[1].as_str(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::RouteOptimizer;

    fn export_lines(report: &OptimizationReport) -> Vec<String> {
        let mut buffer = Vec::new();
        write_report_csv(report, &mut buffer).unwrap();
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_stop_rows_match_report_arrays() {
        let report = RouteOptimizer::new().optimize();
        let lines = export_lines(&report);

        // Header + 8 stop rows per line
        assert!(lines[0].starts_with("line,stop,name"));
        for (line_id, offset) in [(LineId::Line74, 1), (LineId::Line75, 9)] {
            let result = report.line(line_id);
            for i in 0..STOP_COUNT {
                let row: Vec<&str> = lines[offset + i].split(',').collect();
                assert_eq!(row[0], line_id.label());
                assert_eq!(row[1], (i + 1).to_string());
                assert_eq!(
                    row[3].parse::<f64>().unwrap(),
                    result.inter_stop_times[i]
                );
                assert_eq!(
                    row[4].parse::<f64>().unwrap(),
                    result.cumulative_times[i]
                );
                assert_eq!(row[5].parse::<f64>().unwrap(), result.distances[i]);
                assert_eq!(
                    row[6].parse::<u32>().unwrap(),
                    result.passenger_vector[i]
                );
            }
        }
    }

    #[test]
    fn test_frequency_and_intersection_blocks() {
        let report = RouteOptimizer::new().optimize();
        let lines = export_lines(&report);

        let frequencies_at = lines.iter().position(|l| l == "frequencies").unwrap();
        assert_eq!(frequencies_at, 17); // Header + 16 stop rows
        assert!(lines[frequencies_at + 1].starts_with("f74,8"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("beneficio,")));

        let intersections_at = lines.iter().position(|l| l == "intersections").unwrap();
        assert_eq!(lines.len() - intersections_at - 1, 3);
        assert_eq!(lines[intersections_at + 1], "Hospital Japones,74-2,75-2");
    }

    #[test]
    fn test_round_trip_through_import() {
        // Stop rows re-imported as survey rows reproduce the datasets
        // (boarding = load delta at each stop).
        use crate::import::{build_from_records, StopRecord};
        use crate::models::{FleetConfig, LinePair};

        let reference = LinePair::reference();
        let mut rows = Vec::new();
        for line in [&reference.line74, &reference.line75] {
            let mut previous_load = 0i64;
            for i in 0..STOP_COUNT {
                let delta = i64::from(line.passengers[i]) - previous_load;
                previous_load = i64::from(line.passengers[i]);
                rows.push(StopRecord {
                    line_id: line.id.label().to_owned(),
                    stop_index: i as u32,
                    stop_name: line.stop_names[i].clone(),
                    distance_km: line.distances[i],
                    inter_stop_minutes: line.inter_stop_times[i],
                    boarding: delta.max(0) as u32,
                    alighting: (-delta).max(0) as u32,
                });
            }
        }
        let rebuilt = build_from_records(&rows, &FleetConfig::default()).unwrap();
        let report = RouteOptimizer::new()
            .with_lines(rebuilt)
            .optimize();
        let lines = export_lines(&report);
        let row: Vec<&str> = lines[8].split(',').collect(); // Line 74, stop 8
        assert_eq!(row[6].parse::<u32>().unwrap(), reference.line74.passengers[7]);
    }
}
