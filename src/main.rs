//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hoopstats::{
    cli::{Commands, GetCmd, Hoopstats},
    commands::{
        check::handle_check,
        export::handle_export,
        injury_data::handle_injuries,
        match_data::{handle_match_detail, handle_matches, MatchListParams},
        team_data::{handle_leagues, handle_roster, handle_teams},
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Hoopstats::parse();
    let verbose = app.verbose;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Leagues { json } => handle_leagues(json)?,

            GetCmd::Teams { league_id, json } => handle_teams(league_id, json)?,

            GetCmd::Matches {
                league_id,
                team_id,
                status,
                json,
            } => handle_matches(
                MatchListParams {
                    league_id,
                    team_id,
                    status: status.map(Into::into),
                    as_json: json,
                },
                verbose,
            )?,

            GetCmd::Match { match_id, json } => handle_match_detail(match_id, json)?,

            GetCmd::Roster {
                team_id,
                position,
                json,
            } => handle_roster(team_id, position, json, verbose)?,

            GetCmd::Injuries {
                player_id,
                on,
                json,
            } => handle_injuries(player_id, on, json)?,
        },

        Commands::Check { json } => {
            if !handle_check(json, verbose)? {
                std::process::exit(1);
            }
        }

        Commands::Export { out } => handle_export(&out, verbose)?,
    }

    Ok(())
}
