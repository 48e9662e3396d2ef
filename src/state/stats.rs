use super::data::{format_one_decimal, ImageRecord};

/// Aggregate numbers for the current result set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    /// None when there is nothing to average
    pub average_rating: Option<f64>,
}

impl Stats {
    /// Compute count and mean rating over a sequence of records
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ImageRecord>) -> Self {
        let (count, sum) = records
            .into_iter()
            .fold((0usize, 0.0f64), |(count, sum), record| (count + 1, sum + record.rating));

        let average_rating = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        Stats {
            count,
            average_rating,
        }
    }

    /// Average as displayed: one decimal, or a bare "0" when empty
    pub fn average_label(&self) -> String {
        match self.average_rating {
            Some(average) => format_one_decimal(average),
            None => "0".to_string(),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            count: 0,
            average_rating: None,
        }
    }
}
