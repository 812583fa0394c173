//! The joke set.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use toolsmith_protocols::error::ToolError;

const CLASSIC_JOKES: [&str; 5] = [
    "Why did the chicken cross the road? To get to the other side!",
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "Why don't skeletons fight each other? They don't have the guts!",
    "Why did the bicycle fall over? Because it was two-tired!",
];

/// An immutable, non-empty set of jokes.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeBook {
    jokes: Arc<[String]>,
}

impl JokeBook {
    /// Build a joke set. An empty set or a repeated joke is a configuration error.
    pub fn new<I, S>(jokes: I) -> Result<Self, ToolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let jokes: Vec<String> = jokes.into_iter().map(Into::into).collect();
        if jokes.is_empty() {
            return Err(ToolError::Configuration("joke set must not be empty".to_string()));
        }
        {
            let mut seen = HashSet::with_capacity(jokes.len());
            if let Some(dup) = jokes.iter().find(|j| !seen.insert(j.as_str())) {
                return Err(ToolError::Configuration(format!("duplicate joke: {}", dup)));
            }
        }
        Ok(Self { jokes: jokes.into() })
    }

    /// The five jokes the agent ships with.
    pub fn classic() -> Self {
        Self {
            jokes: CLASSIC_JOKES.iter().map(|j| j.to_string()).collect(),
        }
    }

    /// A new set with `joke` appended. A joke already in the set leaves it unchanged.
    pub fn with_joke(&self, joke: impl Into<String>) -> Self {
        let joke = joke.into();
        if self.contains(&joke) {
            return self.clone();
        }
        let mut jokes = self.jokes.to_vec();
        jokes.push(joke);
        Self { jokes: jokes.into() }
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    /// Always false: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn contains(&self, joke: &str) -> bool {
        self.jokes.iter().any(|j| j == joke)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.jokes.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.jokes.iter().map(String::as_str)
    }

    /// Uniformly pick an index.
    pub fn pick_index<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.jokes.len())
    }

    /// Uniformly pick a joke.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.jokes[self.pick_index(rng)]
    }

    /// Pick a joke with the thread-local generator.
    pub fn get_dad_joke(&self) -> &str {
        self.pick(&mut rand::rng())
    }
}

impl Default for JokeBook {
    fn default() -> Self {
        Self::classic()
    }
}
