//! Social network graph with bidirectional friendships
//!
//! Users get sequential ids starting at 1. Friendships are always recorded
//! in both users' sets. [`SocialGraph::get_all_social_paths`] finds the
//! shortest friendship chain from one user to everyone in their extended
//! network.

pub mod populate;
pub mod stats;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::frontier::Queue;

pub use populate::{rng_for, MAX_POPULATION};
pub use stats::NetworkStats;

/// Sequential user identifier, starting at 1
pub type UserId = u32;

/// Shortest friendship path from a start user to each reachable user
pub type SocialPaths = IndexMap<UserId, Vec<UserId>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
}

/// What happened to an `add_friendship` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipOutcome {
    /// Both users now list each other
    Added,
    /// A user cannot befriend itself; nothing changed
    SelfFriendship,
    /// The pair were already friends; nothing changed
    AlreadyFriends,
}

impl FriendshipOutcome {
    pub fn is_added(self) -> bool {
        self == FriendshipOutcome::Added
    }
}

#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    last_id: UserId,
    users: IndexMap<UserId, User>,
    friendships: IndexMap<UserId, IndexSet<UserId>>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user with the next sequential id and no friends
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        let id = self.last_id;
        self.users.insert(id, User { name: name.into() });
        self.friendships.insert(id, IndexSet::new());
        id
    }

    /// Record a bidirectional friendship between `user_id` and `friend_id`.
    ///
    /// Self-friendships and existing friendships are rejected with a warning
    /// and leave the graph unchanged. Unknown ids are an error.
    pub fn add_friendship(
        &mut self,
        user_id: UserId,
        friend_id: UserId,
    ) -> Result<FriendshipOutcome> {
        self.require_user(user_id)?;
        self.require_user(friend_id)?;

        if user_id == friend_id {
            tracing::warn!(user_id, "cannot be friends with yourself");
            return Ok(FriendshipOutcome::SelfFriendship);
        }

        if self.are_friends(user_id, friend_id) || self.are_friends(friend_id, user_id) {
            tracing::warn!(user_id, friend_id, "friendship already exists");
            return Ok(FriendshipOutcome::AlreadyFriends);
        }

        if let Some(friends) = self.friendships.get_mut(&user_id) {
            friends.insert(friend_id);
        }
        if let Some(friends) = self.friendships.get_mut(&friend_id) {
            friends.insert(user_id);
        }
        Ok(FriendshipOutcome::Added)
    }

    /// Whether `friend_id` appears in `user_id`'s friend set
    pub fn are_friends(&self, user_id: UserId, friend_id: UserId) -> bool {
        self.friendships
            .get(&user_id)
            .is_some_and(|friends| friends.contains(&friend_id))
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn friends_of(&self, id: UserId) -> Result<&IndexSet<UserId>> {
        self.friendships
            .get(&id)
            .ok_or(GraphError::UnknownUser { id })
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of distinct friendships (each pair counted once)
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(IndexSet::len).sum::<usize>() / 2
    }

    /// Id handed out by the most recent `add_user`, 0 when empty
    pub fn last_id(&self) -> UserId {
        self.last_id
    }

    fn require_user(&self, id: UserId) -> Result<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownUser { id })
        }
    }

    /// Shortest friendship path from `user_id` to every user in their
    /// extended network.
    ///
    /// `user_id` itself maps to an empty path; every other entry is
    /// `[user_id, ..., friend]`. Users outside the network are absent.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_all_social_paths(&self, user_id: UserId) -> Result<SocialPaths> {
        self.require_user(user_id)?;

        let mut visited: SocialPaths = IndexMap::new();
        visited.insert(user_id, Vec::new());
        let mut queue = Queue::with_start(vec![user_id]);

        while let Some(path) = queue.dequeue() {
            let Some(&last) = path.last() else {
                continue;
            };
            for &friend in self.friendships.get(&last).into_iter().flatten() {
                if visited.contains_key(&friend) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(friend);
                visited.insert(friend, extended.clone());
                queue.enqueue(extended);
            }
        }

        tracing::debug!(reachable = visited.len(), "social paths computed");
        Ok(visited)
    }
}
