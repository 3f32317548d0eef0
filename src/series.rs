use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The benchmarked channel implementations, in the column order of the data file.
#[derive(Debug, Clone, Copy, EnumIter, EnumCount, PartialEq, Eq, Hash)]
pub enum Channel {
    AsyncChannel,
    Flume,
    PostageMpsc,
    Tachyonix,
    TokioMpsc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub column_index: usize,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match *self {
            Channel::AsyncChannel => "async-channel::bounded",
            Channel::Flume => "flume::bounded",
            Channel::PostageMpsc => "postage::mpsc",
            Channel::Tachyonix => "tachyonix",
            Channel::TokioMpsc => "tokio::mpsc",
        }
    }

    /// Column name used by the benchmark runner in the data file header.
    pub fn bench_name(&self) -> &'static str {
        match *self {
            Channel::AsyncChannel => "async_channel",
            Channel::Flume => "flume",
            Channel::PostageMpsc => "postage_mpsc",
            Channel::Tachyonix => "tachyonix",
            Channel::TokioMpsc => "tokio_mpsc",
        }
    }

    // column 0 holds the parameter
    pub fn column_index(&self) -> usize {
        *self as usize + 1
    }

    pub fn spec(&self) -> SeriesSpec {
        SeriesSpec {
            label: self.label(),
            column_index: self.column_index(),
        }
    }
}

pub const COLUMN_COUNT: usize = Channel::COUNT + 1;

pub fn series() -> Vec<SeriesSpec> {
    Channel::iter().map(|channel| channel.spec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_follow_data_file_column_order() {
        let labels: Vec<_> = series().iter().map(|spec| spec.label).collect();
        assert_eq!(
            labels,
            [
                "async-channel::bounded",
                "flume::bounded",
                "postage::mpsc",
                "tachyonix",
                "tokio::mpsc"
            ]
        );

        let columns: Vec<_> = series().iter().map(|spec| spec.column_index).collect();
        assert_eq!(columns, [1, 2, 3, 4, 5]);
        assert_eq!(COLUMN_COUNT, 6);
    }
}
