//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod track {
    use std::io::{self, Write};

    const HEADER: &str = "frame,time_years,body,x_au,y_au";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One body position at one frame.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub frame: usize,
        pub time_years: f64,
        pub body: &'a str,
        pub x_au: f64,
        pub y_au: f64,
    }

    impl Record<'_> {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{},{:.9},{:.9}",
                self.frame, self.time_years, self.body, self.x_au, self.y_au
            )
        }
    }
}

pub mod transfer {
    use std::io::{self, Write};

    const HEADER: &str = "frame,fraction,time_years,craft_x_au,craft_y_au,origin_x_au,origin_y_au,target_x_au,target_y_au";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Craft and both endpoint bodies at one frame of a transit.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub frame: usize,
        pub fraction: f64,
        pub time_years: f64,
        pub craft: [f64; 2],
        pub origin: [f64; 2],
        pub target: [f64; 2],
    }

    impl Record {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{:.6},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
                self.frame,
                self.fraction,
                self.time_years,
                self.craft[0],
                self.craft[1],
                self.origin[0],
                self.origin[1],
                self.target[0],
                self.target[1],
            )
        }
    }
}

pub mod offers {
    use std::io::{self, Write};

    const HEADER: &str = "origin,destination,launch_time_years,outbound_days,stay_days,inbound_days,total_days,status";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Offer grid row. `status` is `ok` for a planned trip; otherwise the durations are empty
    /// and `status` carries the planner's error message (double quotes become single).
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub origin: &'a str,
        pub destination: &'a str,
        pub launch_time_years: f64,
        pub outbound_days: Option<f64>,
        pub stay_days: f64,
        pub inbound_days: Option<f64>,
        pub total_days: Option<f64>,
        pub status: &'a str,
    }

    impl Record<'_> {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let days = |value: Option<f64>| value.map(|d| format!("{d:.3}")).unwrap_or_default();
            writeln!(
                writer,
                "{},{},{:.6},{},{:.3},{},{},\"{}\"",
                self.origin,
                self.destination,
                self.launch_time_years,
                days(self.outbound_days),
                self.stay_days,
                days(self.inbound_days),
                days(self.total_days),
                self.status.replace('"', "'"),
            )
        }
    }
}

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    /// Summary of a single solved leg.
    #[derive(Debug, Clone, Serialize)]
    pub struct LegReport {
        pub origin: String,
        pub target: String,
        pub departure_time_years: f64,
        pub elapsed_years: f64,
        pub elapsed_days: f64,
        pub arrival_time_years: f64,
        pub speed_au_per_year: f64,
        pub speed_km_s: f64,
        pub distance_au: f64,
        pub departure_position_au: [f64; 2],
        pub arrival_position_au: [f64; 2],
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct RoundTripReport {
        pub origin: String,
        pub destination: String,
        pub model: String,
        pub launch_time_years: f64,
        pub stay_years: f64,
        pub total_on_site_years: f64,
        pub total_duration_years: f64,
        pub total_duration_days: f64,
        pub return_time_years: f64,
        pub outbound: LegReport,
        pub inbound: LegReport,
    }

    /// Write any report as pretty JSON followed by a newline.
    pub fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> io::Result<()> {
        to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        writer.flush()
    }
}
