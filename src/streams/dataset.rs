use crate::core::Label;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::Path;

/// A data row needs the five feature columns plus one label per target.
pub const MIN_FIELDS: usize = 7;

/// Labeled training data parsed from a delimited dataset file.
///
/// The first line is a header and is ignored. Each remaining row
/// contributes one shared feature sample plus one label per target
/// (`temp,humidity,wind,precip,condition,jacket,umbrella`); columns past
/// the seventh are ignored. Rows with fewer than [`MIN_FIELDS`] fields
/// are skipped and counted, and unparseable numeric cells fall back to 0.
#[derive(Debug, Default)]
pub struct LabeledDataset {
    pub samples: Vec<Vec<f64>>,
    pub jacket: Vec<Label>,
    pub umbrella: Vec<Label>,
    pub rows_skipped: usize,
}

impl LabeledDataset {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut dataset = LabeledDataset::default();
        let mut lines = reader.lines();

        // Header line.
        let _ = lines.next().transpose()?;

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            dataset.push_row(&line);
        }

        Ok(dataset)
    }

    fn push_row(&mut self, line: &str) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS {
            tracing::warn!(
                fields = fields.len(),
                "skipping dataset row with too few columns"
            );
            self.rows_skipped += 1;
            return;
        }

        let numeric = |raw: &str| raw.trim().parse::<f64>().unwrap_or(0.0);
        self.samples.push(vec![
            numeric(fields[0]),
            numeric(fields[1]),
            numeric(fields[2]),
            numeric(fields[3]),
            numeric(fields[4]),
        ]);
        self.jacket.push(Label::from_dataset_field(fields[5]));
        self.umbrella.push(Label::from_dataset_field(fields[6]));
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
