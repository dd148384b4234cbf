use std::path::{Path, PathBuf};

use crate::format::megabytes;

/// Android package formats picked up by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Package {
    Apk,
    Aab,
}

impl Package {
    const ALL: [Package; 2] = [Package::Apk, Package::Aab];

    /// File name suffix, dot included. Matching is case-sensitive.
    pub fn extension(&self) -> &'static str {
        match self {
            Package::Apk => ".apk",
            Package::Aab => ".aab",
        }
    }

    /// Classify a path by the suffix of its last component.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.as_encoded_bytes();
        Package::ALL.into_iter().find(|package| name.ends_with(package.extension().as_bytes()))
    }
}

#[derive(Debug, Clone)]
pub struct ScanItem {
    pub path: PathBuf,
    pub size: u64,
}

impl ScanItem {
    pub fn new(path: PathBuf, size: u64) -> Self {
        ScanItem { path, size }
    }

    pub fn megabytes(&self) -> f64 {
        megabytes(self.size)
    }
}

/// Matches of a single scan, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub items: Vec<ScanItem>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ScanItem) {
        self.items.push(item);
    }

    /// Sum of the per-file megabyte values.
    pub fn total_megabytes(&self) -> f64 {
        self.items.iter().map(ScanItem::megabytes).sum()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.items.iter().map(|item| item.path.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
