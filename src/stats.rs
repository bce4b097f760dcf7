use std::{io, time::Instant};

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, status_sum: u32);

    fn report(&self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    status_sum: u32,
    peak: u32,
    start: Instant,
}
impl SimpleRecord {
    pub fn new(status_sum: u32) -> Self {
        Self {
            gens: 0,
            status_sum,
            peak: status_sum,
            start: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, status_sum: u32) {
        self.gens += 1;
        self.status_sum = status_sum;
        self.peak = self.peak.max(status_sum);
    }

    fn report(&self) -> Self::Str {
        let gens_per_sec = self.gens as f64 / self.start.elapsed().as_secs_f64();
        format!(
            "{:.02}gen/s gens:{}, status sum:{}, peak:{}",
            gens_per_sec, self.gens, self.status_sum, self.peak
        )
    }
}

pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, u32)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(status_sum: u32) -> Self {
        Self {
            inner: SimpleRecord::new(status_sum),
            data: vec![(0, status_sum)],
            last: Instant::now(),
        }
    }

    pub fn write<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,delta_t,status_sum\n")?;
        for (i, (delta, status_sum)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i, delta, status_sum)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, status_sum: u32) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, status_sum));
        self.inner.record(status_sum);
    }

    fn report(&self) -> Self::Str {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(status_sum: u32, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(status_sum))
        } else {
            Self::Simple(SimpleRecord::new(status_sum))
        }
    }
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            Self::Simple(_) => Err(io::Error::other(
                "cannot save statistics without a csv recorder",
            )),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, status_sum: u32) {
        match self {
            Self::Csv(r) => r.record(status_sum),
            Self::Simple(r) => r.record(status_sum),
        }
    }
    fn report(&self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_tracks_peak() {
        let mut record = SimpleRecord::new(1);
        for sum in [3, 7, 4] {
            record.record(sum);
        }

        let report = record.report();
        assert!(report.contains("gens:3"), "{report}");
        assert!(report.contains("status sum:4"), "{report}");
        assert!(report.contains("peak:7"), "{report}");
    }

    #[test]
    fn csv_rows_start_at_generation_zero() {
        let mut record = CsvRecord::new(1);
        record.record(3);
        record.record(7);

        let mut out = Vec::new();
        record.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows[0], "gen,delta_t,status_sum");
        assert_eq!(rows[1], "0,0,1");
        assert!(rows[2].starts_with("1,") && rows[2].ends_with(",3"));
        assert!(rows[3].starts_with("2,") && rows[3].ends_with(",7"));
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn simple_recorder_cannot_save() {
        let record = SwitchRecorder::new(0, false);

        assert!(record.save("unused.csv").is_err());
    }
}
