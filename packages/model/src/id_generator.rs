use uuid::Uuid;

/// Sequential ID generator for blocks within one editing session
///
/// IDs are `<seed>-<n>`. The seed is random per session, so IDs from two
/// sessions (or two converter runs) never collide, while IDs within a session
/// stay short and ordered.
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String,
    count: u32,
}

impl IDGenerator {
    /// Generator with a fresh random seed
    pub fn new() -> Self {
        let seed = Uuid::new_v4().simple().to_string();
        Self::from_seed(seed[..8].to_string())
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IDGenerator {
    fn default() -> Self {
        Self::new()
    }
}
