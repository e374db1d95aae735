use crate::catalog::TableIndexState;

/// Which of the three groups a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    HaveIndex,
    NeedColumn,
    NeedIndex,
}

impl TableIndexState {
    /// A missing column takes precedence over the index flag, so a table
    /// without the column is never scheduled for indexing, nor reported as
    /// indexed.
    pub fn bucket(&self) -> Bucket {
        if !self.has_column {
            Bucket::NeedColumn
        } else if !self.has_index {
            Bucket::NeedIndex
        } else {
            Bucket::HaveIndex
        }
    }
}

/// Table names partitioned by [`Bucket`], each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub have_index: Vec<String>,
    pub need_column: Vec<String>,
    pub need_index: Vec<String>,
}

impl Buckets {
    pub fn total(&self) -> usize {
        self.have_index.len() + self.need_column.len() + self.need_index.len()
    }
}

pub fn classify<I>(states: I) -> Buckets
where
    I: IntoIterator<Item = TableIndexState>,
{
    let mut buckets = Buckets::default();
    for state in states {
        let target = match state.bucket() {
            Bucket::HaveIndex => &mut buckets.have_index,
            Bucket::NeedColumn => &mut buckets.need_column,
            Bucket::NeedIndex => &mut buckets.need_index,
        };
        target.push(state.table);
    }

    tracing::debug!(
        have_index = buckets.have_index.len(),
        need_column = buckets.need_column.len(),
        need_index = buckets.need_index.len(),
        "Classified tables"
    );

    buckets
}
