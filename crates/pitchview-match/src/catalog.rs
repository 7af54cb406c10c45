use std::collections::HashMap;

use rand::Rng;

/// Key of the referee model.
pub const REFEREE_KEY: &str = "players/ref0/ref";

/// Number of generic per-team models to pick from when a player has no dedicated one.
pub const NUM_DEFAULT_VARIANTS: u32 = 2;

/// Key of the dedicated model of a player, or of a generic team variant.
pub fn player_key(team_id: u32, player_id: u32) -> String {
    format!("players/team{team_id}/{player_id}")
}

/// A store of models addressed by string keys.
#[derive(Debug, Clone)]
pub struct ModelCatalog<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for ModelCatalog<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> ModelCatalog<T> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, replacing any previous model under the same key.
    pub fn insert(&mut self, key: impl Into<String>, model: T) -> Option<T> {
        self.entries.insert(key.into(), model)
    }

    /// Look up a model by key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// The number of registered models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the model of a player.
    ///
    /// Tries the dedicated `players/team{t}/{id}` model first, then one of the
    /// generic team variants drawn at random. Returns `None` if neither exists
    /// and the caller falls back to its own default.
    pub fn player_model<R: Rng + ?Sized>(
        &self,
        team_id: u32,
        player_id: u32,
        rng: &mut R,
    ) -> Option<&T> {
        self.get(&player_key(team_id, player_id)).or_else(|| {
            let variant = rng.random_range(0..NUM_DEFAULT_VARIANTS);
            self.get(&player_key(team_id, variant))
        })
    }

    /// Resolve the referee model.
    pub fn referee_model(&self) -> Option<&T> {
        self.get(REFEREE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_player_key() {
        assert_eq!(player_key(1, 23), "players/team1/23");
    }

    #[test]
    fn test_player_model_dedicated() {
        let mut catalog = ModelCatalog::new();
        catalog.insert(player_key(0, 7), "seven");
        catalog.insert(player_key(0, 0), "generic");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(catalog.player_model(0, 7, &mut rng), Some(&"seven"));
    }

    #[test]
    fn test_player_model_falls_back_to_variant() {
        let mut catalog = ModelCatalog::new();
        for variant in 0..NUM_DEFAULT_VARIANTS {
            catalog.insert(player_key(1, variant), variant);
        }
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            let model = catalog.player_model(1, 99, &mut rng);
            assert!(matches!(model, Some(v) if *v < NUM_DEFAULT_VARIANTS));
        }
    }

    #[test]
    fn test_player_model_missing() {
        let mut catalog = ModelCatalog::new();
        catalog.insert(player_key(0, 0), ());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.player_model(1, 5, &mut rng), None);
        assert_eq!(catalog.referee_model(), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_referee_model() {
        let mut catalog = ModelCatalog::new();
        assert!(catalog.is_empty());
        catalog.insert(REFEREE_KEY, "ref");
        assert_eq!(catalog.referee_model(), Some(&"ref"));
    }
}
