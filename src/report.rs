use std::fmt;
use std::io;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use futures::stream::{self, StreamExt};
use log::{info, warn};
use serde::Serialize;

use crate::api::genius::GeniusClient;
use crate::models::artist::{Artist, ArtistId};

pub const COLUMNS: [&str; 4] = ["search_term", "artist_name", "artist_id", "followers_count"];

/// One line of the report. A term that could not be resolved still gets a
/// row: empty name, no id, zero followers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub search_term: String,
    pub artist_name: String,
    pub artist_id: Option<ArtistId>,
    pub followers_count: u64,
}

impl ReportRow {
    pub fn from_artist(search_term: impl Into<String>, artist: &Artist) -> Self {
        Self {
            search_term: search_term.into(),
            artist_name: artist.name.clone(),
            artist_id: artist.id,
            followers_count: artist.followers_count,
        }
    }

    pub fn degraded(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            artist_name: String::new(),
            artist_id: None,
            followers_count: 0,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.artist_id.is_none() && self.artist_name.is_empty()
    }
}

/// Rows in the same order as the search terms they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportRow> {
        self.rows.iter()
    }

    pub fn degraded_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_degraded()).count()
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        if self.rows.is_empty() {
            writer.write_record(COLUMNS)?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(
            COLUMNS
                .iter()
                .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

        for row in &self.rows {
            table.add_row(vec![
                row.search_term.clone(),
                row.artist_name.clone(),
                row.artist_id.map(|id| id.to_string()).unwrap_or_default(),
                row.followers_count.to_string(),
            ]);
        }
        table
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}

impl IntoIterator for Report {
    type Item = ReportRow;
    type IntoIter = std::vec::IntoIter<ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ReportRow;
    type IntoIter = std::slice::Iter<'a, ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl GeniusClient {
    /// Looks up every term one after another. A failing term is logged and
    /// replaced by a degraded row; it never aborts the batch.
    pub async fn get_artists<I, S>(&self, terms: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = Vec::new();
        for term in terms {
            rows.push(self.report_row(term.into()).await);
        }
        Report::new(rows)
    }

    /// Same contract as [`GeniusClient::get_artists`] with up to `limit`
    /// terms in flight. Rows keep input order whatever order requests finish in.
    pub async fn get_artists_concurrent<I, S>(&self, terms: I, limit: usize) -> Report
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = stream::iter(terms.into_iter().map(Into::<String>::into))
            .map(|term| self.report_row(term))
            .buffered(limit.max(1))
            .collect::<Vec<_>>()
            .await;
        Report::new(rows)
    }

    async fn report_row(&self, term: String) -> ReportRow {
        match self.get_artist(&term).await {
            Ok(payload) => {
                let artist = Artist::from_payload(&payload);
                info!("Fetched '{}' for search term '{term}'", artist.name);
                ReportRow::from_artist(term, &artist)
            }
            Err(err) => {
                warn!("Error fetching data for '{term}': {err}");
                ReportRow::degraded(term)
            }
        }
    }
}
