use rand::Rng;

use crate::error::{ErrorKind, LexResult};

pub const DEFAULT_TEAM: [&str; 4] = ["Sarah", "Mike", "Lisa", "David"];

/// Ordered, non-empty list of players taking turns in team mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    /// The local player always comes first, followed by the team.
    pub fn new<I, S>(local: impl Into<String>, team: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut members = vec![local.into()];
        members.extend(team.into_iter().map(Into::into));
        Self { members }
    }

    pub fn from_members(members: Vec<String>) -> LexResult<Self> {
        if members.is_empty() {
            return Err(ErrorKind::EmptyRoster);
        }
        Ok(Self { members })
    }

    /// Index of a uniformly chosen member.
    pub fn random_seat<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.members.len())
    }

    /// Seat after `seat`, wrapping around. Rotation goes by position, not
    /// by name.
    pub fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.members.len()
    }

    pub fn member(&self, seat: usize) -> &str {
        &self.members[seat % self.members.len()]
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new("You", DEFAULT_TEAM)
    }
}
