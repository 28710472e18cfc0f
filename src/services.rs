//! Application services mapping marts rows onto wire DTOs.
//!
//! This is the only place entity-to-response translation happens; handlers
//! never see row types and repositories never see DTOs. Lookups that find
//! nothing return `Ok(None)` rather than an error.

use crate::db::repository::{FixtureRepository, PlayerRepository, TeamRepository};
use crate::db::schema::{Fixture, Player, Team};
use crate::models::{
    FixtureResponse, FixtureTeamDto, LeagueDto, PlayerResponse, ScoreDto, TeamResponse,
    TeamSummary, VenueDto,
};
use chrono::{NaiveDate, Utc};


/// Player read service.
#[derive(Clone)]
pub struct PlayerService {
    repo: PlayerRepository,
}

impl PlayerService {
    /// Creates the service over a repository.
    #[must_use]
    pub fn new(repo: PlayerRepository) -> Self {
        Self { repo }
    }

    /// Single player by id.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn player_by_id(&self, id: i64) -> Result<Option<PlayerResponse>, sqlx::Error> {
        let player = self.repo.by_id(id).await?;
        Ok(player.map(|p| Self::to_response(&p)))
    }

    /// First page of players.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn all_players(&self) -> Result<Vec<PlayerResponse>, sqlx::Error> {
        let players = self.repo.all().await?;
        Ok(players.iter().map(Self::to_response).collect())
    }

    /// A team's squad, ordered by position. Empty when the team has no
    /// players on record.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn players_by_team(&self, team_id: i64) -> Result<Vec<PlayerResponse>, sqlx::Error> {
        let players = self.repo.by_team(team_id).await?;
        Ok(players.iter().map(Self::to_response).collect())
    }

    fn to_response(player: &Player) -> PlayerResponse {
        let team = match (player.team_id, &player.team_name) {
            (Some(id), Some(name)) => Some(TeamSummary {
                id,
                team_name: name.clone(),
                team_code: player.team_code.clone(),
                team_country: player.team_country.clone(),
                team_logo: player.team_logo.clone(),
            }),
            _ => None,
        };

        PlayerResponse {
            id: player.player_id,
            player_name: player.player_name.clone(),
            age: player.age,
            position: player.position.clone(),
            jersey_number: player.jersey_number,
            photo_url: player.photo_url.clone(),
            team,
        }
    }
}

/// Team read service.
#[derive(Clone)]
pub struct TeamService {
    repo: TeamRepository,
}

impl TeamService {
    /// Creates the service over a repository.
    #[must_use]
    pub fn new(repo: TeamRepository) -> Self {
        Self { repo }
    }

    /// Single team by id.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn team_by_id(&self, id: i64) -> Result<Option<TeamResponse>, sqlx::Error> {
        let team = self.repo.by_id(id).await?;
        Ok(team.map(|t| Self::to_response(&t)))
    }

    /// First page of teams.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn all_teams(&self) -> Result<Vec<TeamResponse>, sqlx::Error> {
        let teams = self.repo.all().await?;
        Ok(teams.iter().map(Self::to_response).collect())
    }

    /// Teams of one country, exact match.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn teams_by_country(&self, country: &str) -> Result<Vec<TeamResponse>, sqlx::Error> {
        let teams = self.repo.by_country(country).await?;
        Ok(teams.iter().map(Self::to_response).collect())
    }

    /// Single team by case-sensitive exact name.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn team_by_name(&self, name: &str) -> Result<Option<TeamResponse>, sqlx::Error> {
        let team = self.repo.by_name(name).await?;
        Ok(team.map(|t| Self::to_response(&t)))
    }

    fn to_response(team: &Team) -> TeamResponse {
        TeamResponse {
            id: team.team_id,
            team_name: team.team_name.clone(),
            team_code: team.team_code.clone(),
            team_country: team.team_country.clone(),
            team_founded: team.team_founded,
            is_national_team: team.is_national_team,
            team_logo: team.team_logo.clone(),
            venue: Self::venue_of(team),
        }
    }

    fn venue_of(team: &Team) -> Option<VenueDto> {
        if team.venue_id.is_none() && team.venue_name.is_none() {
            return None;
        }
        Some(VenueDto {
            venue_id: team.venue_id,
            venue_name: team.venue_name.clone(),
            venue_address: team.venue_address.clone(),
            venue_city: team.venue_city.clone(),
            venue_capacity: team.venue_capacity,
            venue_surface: team.venue_surface.clone(),
        })
    }
}

/// Fixture read service.
#[derive(Clone)]
pub struct FixtureService {
    repo: FixtureRepository,
}

impl FixtureService {
    /// Creates the service over a repository.
    #[must_use]
    pub fn new(repo: FixtureRepository) -> Self {
        Self { repo }
    }

    /// Single fixture by id.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn fixture_by_id(&self, id: i64) -> Result<Option<FixtureResponse>, sqlx::Error> {
        let fixture = self.repo.by_id(id).await?;
        Ok(fixture.map(|f| Self::to_response(&f)))
    }

    /// First page of fixtures, most recent first.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn all_fixtures(&self) -> Result<Vec<FixtureResponse>, sqlx::Error> {
        let fixtures = self.repo.all().await?;
        Ok(fixtures.iter().map(Self::to_response).collect())
    }

    /// Fixtures on one calendar day, kickoff ascending.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn fixtures_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<FixtureResponse>, sqlx::Error> {
        let fixtures = self.repo.by_date(date).await?;
        Ok(fixtures.iter().map(Self::to_response).collect())
    }

    /// A team's fixtures, home or away, newest first.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn fixtures_by_team(
        &self,
        team_id: i64,
    ) -> Result<Vec<FixtureResponse>, sqlx::Error> {
        let fixtures = self.repo.by_team(team_id).await?;
        Ok(fixtures.iter().map(Self::to_response).collect())
    }

    /// Fixtures with one exact status code.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn fixtures_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<FixtureResponse>, sqlx::Error> {
        let fixtures = self.repo.by_status(status).await?;
        Ok(fixtures.iter().map(Self::to_response).collect())
    }

    /// Fixtures currently in play across the whole live status set.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn live_fixtures(&self) -> Result<Vec<FixtureResponse>, sqlx::Error> {
        let fixtures = self.repo.live().await?;
        Ok(fixtures.iter().map(Self::to_response).collect())
    }

    /// Today's fixtures (UTC calendar day).
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub async fn todays_fixtures(&self) -> Result<Vec<FixtureResponse>, sqlx::Error> {
        self.fixtures_by_date(Utc::now().date_naive()).await
    }

    fn to_response(fixture: &Fixture) -> FixtureResponse {
        let status = fixture.status();

        FixtureResponse {
            id: fixture.fixture_id,
            fixture_datetime: fixture.fixture_datetime,
            fixture_date: fixture.fixture_date,
            season: fixture.season,
            status: fixture.status.clone(),
            status_long: fixture.status_long.clone(),
            minutes_elapsed: fixture.minutes_elapsed,
            league: LeagueDto {
                league_id: fixture.league_id,
                league_name: fixture.league_name.clone(),
                league_type: fixture.league_type.clone(),
                league_country: fixture.league_country.clone(),
                league_round: fixture.league_round.clone(),
            },
            venue: Self::venue_of(fixture),
            home_team: FixtureTeamDto {
                team_id: fixture.home_team_id,
                team_name: fixture.home_team_name.clone(),
                team_code: fixture.home_team_code.clone(),
                winner: fixture.home_team_winner,
            },
            away_team: FixtureTeamDto {
                team_id: fixture.away_team_id,
                team_name: fixture.away_team_name.clone(),
                team_code: fixture.away_team_code.clone(),
                winner: fixture.away_team_winner,
            },
            score: Self::score_of(fixture),
            result: fixture.result.clone(),
            referee: fixture.referee.clone(),
            is_live: status.is_live(),
            is_finished: status.is_finished(),
            is_scheduled: status.is_scheduled(),
        }
    }

    fn venue_of(fixture: &Fixture) -> Option<VenueDto> {
        if fixture.venue_id.is_none() && fixture.venue_name.is_none() {
            return None;
        }
        Some(VenueDto {
            venue_id: fixture.venue_id,
            venue_name: fixture.venue_name.clone(),
            venue_address: None,
            venue_city: fixture.venue_city.clone(),
            venue_capacity: fixture.venue_capacity,
            venue_surface: None,
        })
    }

    fn score_of(fixture: &Fixture) -> Option<ScoreDto> {
        if fixture.goals_home.is_none()
            && fixture.goals_away.is_none()
            && fixture.halftime_home.is_none()
            && fixture.halftime_away.is_none()
            && fixture.fulltime_home.is_none()
            && fixture.fulltime_away.is_none()
        {
            return None;
        }
        Some(ScoreDto {
            goals_home: fixture.goals_home,
            goals_away: fixture.goals_away,
            halftime_home: fixture.halftime_home,
            halftime_away: fixture.halftime_away,
            fulltime_home: fixture.fulltime_home,
            fulltime_away: fixture.fulltime_away,
            total_goals: fixture.total_goals,
            goal_difference: fixture.goal_difference,
        })
    }
}
