use crate::records::Record;

/// Delegation count (1-based position in the input) paired with the
/// measured average time.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub index: Vec<u32>,
    pub avg_time_ms: Vec<f64>,
}

impl Series {
    pub fn from_records(records: &[Record]) -> Self {
        let index = (1..=records.len() as u32).collect();
        let avg_time_ms = records.iter().map(|r| r.avg_time).collect();
        Series { index, avg_time_ms }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.index.iter().map(|&i| i as f64).collect()
    }

    /// `(delegations, avg_time_ms)` pairs in input order.
    pub fn indexed(&self) -> impl Iterator<Item = (u32, f64)> + Clone + '_ {
        self.index.iter().copied().zip(self.avg_time_ms.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_one_based() {
        let records: Vec<Record> = [5.0, 4.0, 3.0]
            .into_iter()
            .map(|avg_time| Record { avg_time })
            .collect();
        let series = Series::from_records(&records);
        assert_eq!(series.index, vec![1, 2, 3]);
        assert_eq!(series.avg_time_ms, vec![5.0, 4.0, 3.0]);
        assert_eq!(
            series.indexed().collect::<Vec<_>>(),
            vec![(1, 5.0), (2, 4.0), (3, 3.0)]
        );
    }

    #[test]
    fn test_empty() {
        let series = Series::from_records(&[]);
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }
}
