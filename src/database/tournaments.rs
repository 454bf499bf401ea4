use anyhow::{Context, Result};
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use crate::domain::{Region, Tournament};

const SELECT_COLUMNS: &str = "SELECT name, season, region, section_index, participation_section, start_date, end_date, teams FROM tournaments";

pub fn upsert_tournament(conn: &mut DbConn, tournament: &Tournament) -> Result<()> {
    let teams = serde_json::to_string(&tournament.teams).context("Failed to serialize teams")?;
    let sql = "INSERT INTO tournaments (name, season, region, section_index, participation_section, start_date, end_date, teams) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
               ON CONFLICT(name) DO UPDATE SET season = excluded.season, region = excluded.region, \
               section_index = excluded.section_index, participation_section = excluded.participation_section, \
               start_date = excluded.start_date, end_date = excluded.end_date, teams = excluded.teams, \
               updated_at = CURRENT_TIMESTAMP";

    conn.execute(
        sql,
        params![
            tournament.name,
            tournament.season,
            tournament.region.code(),
            tournament.index as i64,
            tournament.participation_section,
            tournament.start,
            tournament.end,
            teams,
        ],
    )
    .with_context(|| format!("Failed to upsert tournament {}", tournament.name))?;

    Ok(())
}

pub fn find_by_name(conn: &mut DbConn, name: &str) -> Result<Option<Tournament>> {
    let sql = format!("{} WHERE name = ?1", SELECT_COLUMNS);

    let row = conn
        .query_row(&sql, params![name], read_tournament_row)
        .optional()
        .context("Failed to query tournament by name")?;

    row.map(into_tournament).transpose()
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Tournament>> {
    let sql = format!("{} ORDER BY start_date, name", SELECT_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], read_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.into_iter().map(into_tournament).collect()
}

/// Columns as stored; teams and region are validated afterwards
struct TournamentRow {
    name: String,
    season: String,
    region: u8,
    section_index: i64,
    participation_section: i32,
    start: String,
    end: String,
    teams: String,
}

fn read_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentRow> {
    Ok(TournamentRow {
        name: row.get(0)?,
        season: row.get(1)?,
        region: row.get(2)?,
        section_index: row.get(3)?,
        participation_section: row.get(4)?,
        start: row.get(5)?,
        end: row.get(6)?,
        teams: row.get(7)?,
    })
}

fn into_tournament(row: TournamentRow) -> Result<Tournament> {
    let region = Region::try_from(row.region).map_err(anyhow::Error::msg)?;
    let teams = serde_json::from_str(&row.teams)
        .with_context(|| format!("Failed to parse teams of {}", row.name))?;

    Ok(Tournament {
        name: row.name,
        season: row.season,
        region,
        index: usize::try_from(row.section_index).context("Negative section index")?,
        participation_section: row.participation_section,
        start: row.start,
        end: row.end,
        teams,
    })
}
