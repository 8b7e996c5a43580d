//! CLI argument definitions and parsing.

pub mod filters;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{LeagueId, MatchId, PlayerId, Position, TeamId};
use filters::MatchStatusFilter;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List leagues and their season windows.
    Leagues {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List teams, optionally only those playing in one league.
    Teams {
        /// League ID (or set `HOOPSTATS_LEAGUE_ID` env var).
        #[clap(long = "league", short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List match cards.
    Matches {
        /// League ID (or set `HOOPSTATS_LEAGUE_ID` env var).
        #[clap(long = "league", short)]
        league_id: Option<LeagueId>,

        /// Only matches involving this team (home or away).
        #[clap(long = "team", short)]
        team_id: Option<TeamId>,

        /// Only matches in this state.
        #[clap(long, short, value_enum)]
        status: Option<MatchStatusFilter>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one match with its play-by-play and the players involved.
    Match {
        /// Match ID.
        match_id: MatchId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a team's roster.
    Roster {
        /// Team ID.
        team_id: TeamId,

        /// Only players listed at this position (PG, SG, SF, PF, C).
        #[clap(long, short)]
        position: Option<Position>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List injury reports.
    Injuries {
        /// Only this player's injury history.
        #[clap(long = "player", short)]
        player_id: Option<PlayerId>,

        /// Only injuries in effect on this date (YYYY-MM-DD).
        #[clap(long)]
        on: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hoopstats", about = "Basketball statistics dataset browser")]
pub struct Hoopstats {
    /// Print progress details.
    #[clap(long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query the compiled-in dataset
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Verify referential integrity of the compiled-in dataset
    Check {
        /// Output violations as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Write every table as `<table>.json` into a directory
    Export {
        /// Destination directory, created if missing.
        #[clap(long, short)]
        out: PathBuf,
    },
}
