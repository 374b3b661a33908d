// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;

/// One literary work as read from the PCA table.
///
/// Column names follow the exported table: `PC1`, `PC2`, `Author`,
/// `Full Author`, `Simple Genre`, `Century` and `WWO Title`. Unknown columns
/// are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WorkRecord {
    /// First principal component.
    #[serde(rename = "PC1")]
    pub pc1: f64,
    /// Second principal component.
    #[serde(rename = "PC2")]
    pub pc2: f64,
    /// Short author identifier.
    #[serde(rename = "Author")]
    pub author: String,
    /// Author display name.
    #[serde(rename = "Full Author")]
    pub full_author: String,
    /// Coarse genre label.
    #[serde(rename = "Simple Genre")]
    pub genre: String,
    /// Century the work was published in.
    #[serde(rename = "Century")]
    pub century: String,
    /// Title of the work.
    #[serde(rename = "WWO Title")]
    pub title: String,
}
