use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{SocialGraph, UserId};
use crate::bail_invalid;
use crate::error::Result;

/// Largest population `populate_graph` accepts. Every unordered pair of
/// users is materialised as a candidate, so memory grows with the square.
pub const MAX_POPULATION: u32 = 5_000;

/// Seeded generator when `seed` is given, entropy otherwise
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl SocialGraph {
    /// Reset the graph and fill it with `num_users` users and
    /// `num_users * avg_friendships / 2` random friendships.
    ///
    /// Every unordered pair of users is a candidate exactly once, so the
    /// requested count must not exceed `num_users * (num_users - 1) / 2`.
    /// Populations above [`MAX_POPULATION`] are rejected.
    #[tracing::instrument(level = "debug", skip(self, rng))]
    pub fn populate_graph<R: Rng + ?Sized>(
        &mut self,
        num_users: u32,
        avg_friendships: u32,
        rng: &mut R,
    ) -> Result<()> {
        if num_users > MAX_POPULATION {
            bail_invalid!(
                "num_users",
                format!("{} (at most {})", num_users, MAX_POPULATION)
            );
        }

        let n = num_users as usize;
        let wanted = n * avg_friendships as usize / 2;
        let available = n * n.saturating_sub(1) / 2;
        if wanted > available {
            bail_invalid!(
                "avg_friendships",
                format!(
                    "{} (must be less than the number of users, {})",
                    avg_friendships, num_users
                )
            );
        }

        *self = SocialGraph::new();
        for index in 1..=num_users {
            self.add_user(format!("User id: {}", index));
        }

        let mut candidates: Vec<(UserId, UserId)> = Vec::with_capacity(available);
        for user_id in 1..=self.last_id {
            for friend_id in (user_id + 1)..=self.last_id {
                candidates.push((user_id, friend_id));
            }
        }
        candidates.shuffle(rng);

        for (user_id, friend_id) in candidates.into_iter().take(wanted) {
            self.add_friendship(user_id, friend_id)?;
        }

        tracing::debug!(
            users = self.user_count(),
            friendships = self.friendship_count(),
            "graph populated"
        );
        Ok(())
    }

    /// [`SocialGraph::populate_graph`] driven by a seeded generator
    pub fn populate_graph_seeded(
        &mut self,
        num_users: u32,
        avg_friendships: u32,
        seed: u64,
    ) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.populate_graph(num_users, avg_friendships, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_populate_counts() {
        let mut graph = SocialGraph::new();
        graph.populate_graph_seeded(10, 2, 7).unwrap();

        assert_eq!(graph.user_count(), 10);
        assert_eq!(graph.last_id(), 10);
        assert_eq!(graph.friendship_count(), 10);
        assert_eq!(graph.user(3).unwrap().name, "User id: 3");
    }

    #[test]
    fn test_populate_resets_previous_state() {
        let mut graph = SocialGraph::new();
        for name in ["a", "b", "c", "d", "e"] {
            graph.add_user(name);
        }
        graph.add_friendship(1, 2).unwrap();

        graph.populate_graph_seeded(3, 0, 1).unwrap();
        assert_eq!(graph.user_count(), 3);
        assert_eq!(graph.last_id(), 3);
        assert_eq!(graph.friendship_count(), 0);
    }

    #[test]
    fn test_populate_is_reproducible_with_seed() {
        let mut first = SocialGraph::new();
        let mut second = SocialGraph::new();
        first.populate_graph_seeded(50, 4, 99).unwrap();
        second.populate_graph_seeded(50, 4, 99).unwrap();

        for id in 1..=50 {
            let a: Vec<_> = first.friends_of(id).unwrap().iter().copied().collect();
            let b: Vec<_> = second.friends_of(id).unwrap().iter().copied().collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_populate_average_degree() {
        let mut graph = SocialGraph::new();
        graph.populate_graph(200, 6, &mut rng_for(Some(3))).unwrap();

        let total_degree: usize = (1..=200)
            .map(|id| graph.friends_of(id).unwrap().len())
            .sum();
        assert_eq!(total_degree, 200 * 6);
    }

    #[test]
    fn test_populate_complete_graph() {
        let mut graph = SocialGraph::new();
        graph.populate_graph_seeded(5, 4, 11).unwrap();
        assert_eq!(graph.friendship_count(), 10);
        for id in 1..=5 {
            assert_eq!(graph.friends_of(id).unwrap().len(), 4);
        }
    }

    #[test]
    fn test_populate_rejects_too_many_friendships() {
        let mut graph = SocialGraph::new();
        graph.add_user("keep");
        let err = graph.populate_graph_seeded(5, 5, 1).unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
        // Rejected before reset
        assert_eq!(graph.user_count(), 1);
    }

    #[test]
    fn test_populate_rejects_oversized_population() {
        let mut graph = SocialGraph::new();
        graph.add_user("keep");
        let err = graph
            .populate_graph_seeded(MAX_POPULATION + 1, 2, 1)
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
        assert!(err.to_string().contains("num_users"));
        assert_eq!(graph.user_count(), 1);
    }

    #[test]
    fn test_populate_empty() {
        let mut graph = SocialGraph::new();
        graph.populate_graph_seeded(0, 0, 1).unwrap();
        assert_eq!(graph.user_count(), 0);
    }
}
