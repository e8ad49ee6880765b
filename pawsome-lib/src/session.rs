use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{
    Error, Result,
    config::CoreConfig,
    entities::{CurrentUser, Match, NewPlaydate, Playdate, PlaydateId, Profile, ProfileId},
    seed::Seed,
};

/// What the user did with the profile on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Decision {
    #[strum(to_string = "pass", serialize = "n")]
    Pass,
    #[strum(to_string = "like", serialize = "y")]
    Like,
}

impl Decision {
    pub fn liked(self) -> bool {
        self == Decision::Like
    }
}

impl From<bool> for Decision {
    fn from(liked: bool) -> Self {
        if liked { Decision::Like } else { Decision::Pass }
    }
}

/// One photo in the gallery of match posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post<'a> {
    pub match_id: ProfileId,
    pub author: &'a str,
    /// Position within the author's posts
    pub index: usize,
    pub url: &'a str,
}

/// State of one user's browsing session.
///
/// Browsing is cyclic: the cursor walks over the profiles and wraps back to the first one
/// after the last, so a session never runs out of candidates. Every like appends a [`Match`],
/// including for profiles that were already matched on an earlier lap.
#[derive(Debug, Clone)]
pub struct MatchSession {
    profiles: Vec<Profile>,
    cursor: usize,
    matches: Vec<Match>,
    playdates: Vec<Playdate>,
    current_user: CurrentUser,
}

impl MatchSession {
    /// Start a session over `seed`. Fails if the seed has no profiles to browse.
    pub fn new(seed: Seed, current_user: CurrentUser) -> Result<Self> {
        let Seed {
            profiles,
            matches,
            playdates,
        } = seed;

        if profiles.is_empty() {
            return Err(Error::NoProfiles);
        }

        debug!(
            "Starting session for {} with {} profiles",
            current_user.name,
            profiles.len()
        );

        Ok(Self {
            profiles,
            cursor: 0,
            matches,
            playdates,
            current_user,
        })
    }

    /// Start a session from the seed and current user named in `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> Result<Self> {
        let seed = Seed::load_or_builtin(cfg.seed_path.as_deref())?;
        Self::new(seed, cfg.current_user.clone())
    }

    /// Record a decision on the profile under the cursor and move on to the next one.
    ///
    /// Returns the new [`Match`] when `liked` is true.
    pub fn decide(&mut self, liked: bool) -> Option<&Match> {
        let new_match = if liked {
            self.current_profile().map(Match::from)
        } else {
            None
        };

        self.cursor = (self.cursor + 1) % self.profiles.len();

        match new_match {
            Some(new_match) => {
                debug!("Matched with {} ({})", new_match.name(), new_match.id());
                self.matches.push(new_match);
                self.matches.last()
            }
            None => {
                debug!("Passed, cursor now at {}", self.cursor);
                None
            }
        }
    }

    /// Host a new playdate as the current user and return its id.
    ///
    /// The form data is taken as-is; callers check it with [`NewPlaydate::validate`] first.
    pub fn create_playdate(&mut self, new_playdate: NewPlaydate) -> PlaydateId {
        let id = PlaydateId::from(self.playdates.len() + 1);
        let playdate = Playdate::hosted(id, &self.current_user, new_playdate);

        debug!(
            "{} is hosting playdate {id} at {} on {}",
            playdate.host_name(),
            playdate.location(),
            playdate.date()
        );

        self.playdates.push(playdate);

        id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The profile on the card. Only `None` if the cursor somehow left the profile list.
    pub fn current_profile(&self) -> Option<&Profile> {
        self.profiles.get(self.cursor)
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn playdates(&self) -> &[Playdate] {
        &self.playdates
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    /// Every post of every match, in match order and then post order.
    pub fn posts(&self) -> impl Iterator<Item = Post<'_>> {
        self.matches.iter().flat_map(|m| {
            m.posts().iter().enumerate().map(move |(index, url)| Post {
                match_id: m.id(),
                author: m.name(),
                index,
                url,
            })
        })
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn session() -> MatchSession {
        MatchSession::new(Seed::builtin().unwrap(), CurrentUser::default()).unwrap()
    }

    fn match_ids(session: &MatchSession) -> Vec<ProfileId> {
        session.matches().iter().map(Match::id).collect()
    }

    #[test]
    fn test_new_empty_seed() {
        assert!(matches!(
            MatchSession::new(Seed::default(), CurrentUser::default()),
            Err(Error::NoProfiles)
        ));
    }

    #[test]
    fn test_from_config() {
        let session = MatchSession::from_config(&CoreConfig::mock()).unwrap();

        assert_eq!(session.cursor(), 0);
        assert_eq!(session.profiles().len(), 4);
        assert_eq!(session.current_user(), &CurrentUser::default());
    }

    #[test]
    fn test_pass_leaves_matches_alone() {
        let mut session = session();
        let before = session.matches().to_vec();
        let count = session.profiles().len();

        for n in 1..=10 {
            assert!(session.decide(false).is_none());
            assert_eq!(session.matches(), before.as_slice());
            assert_eq!(session.cursor(), n % count);
        }
    }

    #[test]
    fn test_like_appends_current_profile() {
        let mut session = session();

        for _ in 0..9 {
            let expected = session.current_profile().unwrap().id();
            let before = session.matches().len();

            let new_match = session.decide(true).unwrap();
            assert_eq!(new_match.id(), expected);
            assert!(new_match.posts().is_empty());

            assert_eq!(session.matches().len(), before + 1);
            assert_eq!(session.matches().last().map(Match::id), Some(expected));
        }
    }

    #[test]
    fn test_cursor_is_cyclic() {
        let mut session = session();
        let count = session.profiles().len();

        for liked in [true, false, false, true, false, true, true] {
            session.decide(liked);
            assert!(session.cursor() < count);
        }

        let start = session.cursor();
        for _ in 0..count {
            session.decide(true);
        }
        assert_eq!(session.cursor(), start);
    }

    #[test]
    fn test_decision_sequence() {
        let mut session = session();
        let seeded = match_ids(&session);

        for liked in [true, false, true, true] {
            session.decide(liked);
        }

        let expected: Vec<ProfileId> = seeded
            .into_iter()
            .chain([1, 3, 4].map(ProfileId::from))
            .collect();
        assert_eq!(match_ids(&session), expected);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_rematching_duplicates() {
        let mut session = session();
        let count = session.profiles().len();

        session.decide(true);
        for _ in 1..count {
            session.decide(false);
        }
        session.decide(true);

        let buddy = ProfileId::from(1);
        assert_eq!(
            session
                .matches()
                .iter()
                .filter(|m| m.id() == buddy)
                .count(),
            2
        );
    }

    #[test]
    fn test_create_playdate() {
        let mut session = session();
        let before = session.playdates().len();

        let id = session.create_playdate(NewPlaydate::new("Dog Park", "2024-01-01", "Fun"));

        assert_eq!(id, PlaydateId::from(before + 1));
        let playdate = session.playdates().last().unwrap();
        assert_eq!(playdate.id(), id);
        assert_eq!(playdate.host_id(), ProfileId::from(1));
        assert_eq!(playdate.host_name(), "You");
        assert_eq!(playdate.location(), "Dog Park");
        assert_eq!(playdate.date(), "2024-01-01");
        assert_eq!(playdate.description(), "Fun");
    }

    #[test]
    fn test_create_playdate_custom_host() {
        let mut session = MatchSession::new(
            Seed::builtin().unwrap(),
            CurrentUser::new(ProfileId::from(99), "Sam"),
        )
        .unwrap();

        session.create_playdate(NewPlaydate::new("Dog Park", "2024-01-01", "Fun"));
        let id = session.create_playdate(NewPlaydate::new("Beach", "2024-01-02", "Sand"));

        assert_eq!(id, PlaydateId::from(4));
        assert_eq!(
            session.playdates().last().map(|p| p.host_name().as_str()),
            Some("Sam")
        );
    }

    #[test]
    fn test_posts() {
        let mut session = session();
        session.decide(true);

        let posts: Vec<(ProfileId, &str, usize)> = session
            .posts()
            .map(|p| (p.match_id, p.author, p.index))
            .collect();

        assert_eq!(
            posts,
            [
                (ProfileId::from(5), "Charlie", 0),
                (ProfileId::from(5), "Charlie", 1),
                (ProfileId::from(6), "Daisy", 0),
            ]
        );
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!(Decision::from_str("like").unwrap(), Decision::Like);
        assert_eq!(Decision::from_str("Y").unwrap(), Decision::Like);
        assert_eq!(Decision::from_str("pass").unwrap(), Decision::Pass);
        assert!(Decision::from_str("maybe").is_err());
        assert_eq!(Decision::Like.to_string(), "like");
        assert!(Decision::from(true).liked());
    }
}
