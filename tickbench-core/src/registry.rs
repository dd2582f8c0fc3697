//! Test Registry
//!
//! Holds the set of registered tests with their group membership and
//! optional group descriptions. Groups are not stored entities: the group
//! list and per-group test lists are derived from the test set on demand,
//! so they always reflect current registrations at scheduling time.

use crate::manager::TestManager;
use fxhash::FxHashMap;

/// A registered test body.
///
/// Receives the per-run measurement context and must eventually call
/// [`TestManager::complete`] on every path, or the run stalls on this test.
pub type TestBody = Box<dyn Fn(TestManager) + Send + Sync + 'static>;

/// A registered test: `(group, name)` identity plus the body to execute.
/// Immutable after registration.
pub struct TestDef {
    /// Group label the test belongs to.
    pub group: String,
    /// Test name within the group.
    pub name: String,
    body: TestBody,
}

impl TestDef {
    /// Invoke the test body with a fresh measurement context.
    pub fn invoke(&self, manager: TestManager) {
        (self.body)(manager);
    }
}

impl std::fmt::Debug for TestDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestDef")
            .field("group", &self.group)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Owned pool of registered tests.
///
/// An explicitly constructed instance with no ambient state; "reset" is
/// either [`TestRegistry::clear`] or constructing a new registry. A run in
/// flight borrows the registry, so mid-run mutation is rejected by the
/// borrow checker rather than left undefined.
#[derive(Debug, Default)]
pub struct TestRegistry {
    tests: Vec<TestDef>,
    descriptions: FxHashMap<String, String>,
}

impl TestRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a test under `group` with the given `name`.
    ///
    /// Duplicate `(group, name)` pairs are retained and both run; nothing
    /// here can fail.
    pub fn add_test(
        &mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        body: impl Fn(TestManager) + Send + Sync + 'static,
    ) {
        self.tests.push(TestDef {
            group: group.into(),
            name: name.into(),
            body: Box::new(body),
        });
    }

    /// Register a test and (over)write the long description for its group.
    /// Last registered description wins.
    pub fn add_test_with_description(
        &mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        body: impl Fn(TestManager) + Send + Sync + 'static,
        description: impl Into<String>,
    ) {
        let group = group.into();
        self.descriptions.insert(group.clone(), description.into());
        self.add_test(group, name, body);
    }

    /// Distinct group labels among all registered tests, lexicographically
    /// sorted. Insensitive to registration order beyond the sort.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = self.tests.iter().map(|t| t.group.as_str()).collect();
        groups.sort_unstable();
        groups.dedup();
        groups
    }

    /// All tests registered under `group`, sorted by name.
    ///
    /// The sort is stable, so duplicate names keep registration order.
    /// Unknown groups yield an empty list.
    pub fn tests_in(&self, group: &str) -> Vec<&TestDef> {
        let mut tests: Vec<&TestDef> = self.tests.iter().filter(|t| t.group == group).collect();
        tests.sort_by(|a, b| a.name.cmp(&b.name));
        tests
    }

    /// Long description stored for `group`, if any.
    pub fn description(&self, group: &str) -> Option<&str> {
        self.descriptions.get(group).map(String::as_str)
    }

    /// Remove all tests and group descriptions.
    pub fn clear(&mut self) {
        self.tests.clear();
        self.descriptions.clear();
    }

    /// Number of registered tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the registry holds no tests.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
