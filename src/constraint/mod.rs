//! A small fluent rule engine over [`Os`] values.
//!
//! An [`OsConstraint`] is an ordered list of clauses. Every predicate added
//! through the builder lands in the current clause (logical AND); [`pick`]
//! attaches a payload to that clause and opens a fresh one, and [`or`] opens
//! a fresh one explicitly (logical OR across clauses, first satisfied clause
//! wins). Construction mutates only the builder itself; evaluation is
//! read-only and freely repeatable.
//!
//! ```
//! use osdetect::{Distro, Family, Os, OsConstraint, WindowsRelease};
//!
//! let launcher = OsConstraint::new()
//!     .is_family(&[Family::Linux, Family::Mac]).pick("run.sh")
//!     .win().release_min(WindowsRelease::Win10).general().pick("run.bat");
//!
//! assert_eq!(launcher.get(&Os::linux(Distro::Ubuntu)), Ok(&"run.sh"));
//! assert!(launcher.get(&Os::windows(WindowsRelease::Win7, false)).is_err());
//! ```
//!
//! [`pick`]: OsConstraint::pick
//! [`or`]: OsConstraint::or

mod specific;

pub use specific::{LinuxConstraint, MacConstraint, WinConstraint};

use crate::current::current;
use crate::error::{Result, UnsupportedOsError};
use crate::os::{Family, Os};

type Condition = Box<dyn Fn(&Os) -> bool>;

/// One AND-chain of predicates plus the payload it selects.
struct Clause<T> {
    conditions: Vec<Condition>,
    payload: Option<T>,
}

impl<T> Clause<T> {
    fn new() -> Self {
        Self { conditions: Vec::new(), payload: None }
    }

    fn matches(&self, target: &Os) -> bool {
        self.conditions.iter().all(|condition| condition(target))
    }

    // The builder always keeps an open clause at the tail; until something is
    // added to it, that clause is an artifact of construction, not a rule.
    fn is_effective(&self) -> bool {
        !self.conditions.is_empty() || self.payload.is_some()
    }
}

/// A lazily evaluated OR-of-AND rule set mapping an [`Os`] to a payload, a
/// boolean, or an enforcement failure.
pub struct OsConstraint<T> {
    clauses: Vec<Clause<T>>,
    fallback: Option<T>,
}

impl<T> OsConstraint<T> {
    /// A constraint with no fallback: [`get`](Self::get) fails when no clause
    /// matches.
    pub fn new() -> Self {
        Self { clauses: vec![Clause::new()], fallback: None }
    }

    /// A constraint returning `fallback` from [`get`](Self::get) when no
    /// clause matches.
    pub fn with_fallback(fallback: T) -> Self {
        Self { clauses: vec![Clause::new()], fallback: Some(fallback) }
    }

    pub(crate) fn add_condition(mut self, condition: impl Fn(&Os) -> bool + 'static) -> Self {
        if self.clauses.is_empty() {
            self.clauses.push(Clause::new());
        }
        let last = self.clauses.len() - 1;
        self.clauses[last].conditions.push(Box::new(condition));
        self
    }

    /// Requires the target to belong to one of the given families.
    pub fn is_family(self, families: &[Family]) -> Self {
        let families = families.to_vec();
        self.add_condition(move |os| os.is_family(&families))
    }

    /// Requires the target to belong to none of the given families.
    pub fn is_not_family(self, families: &[Family]) -> Self {
        let families = families.to_vec();
        self.add_condition(move |os| !os.is_family(&families))
    }

    /// Requires the target to equal one of the candidates.
    pub fn is(self, candidates: &[Os]) -> Self {
        let candidates = candidates.to_vec();
        self.add_condition(move |os| os.is(&candidates))
    }

    /// Requires the target to equal none of the candidates.
    pub fn is_not(self, candidates: &[Os]) -> Self {
        let candidates = candidates.to_vec();
        self.add_condition(move |os| !os.is(&candidates))
    }

    /// Requires the target to be at least `baseline`. Targets without a
    /// defined ordering against `baseline` simply do not satisfy the clause.
    pub fn at_least(self, baseline: Os) -> Self {
        self.add_condition(move |os| matches!(os.is_at_least(&baseline), Ok(true)))
    }

    /// Opens a Windows-scoped sub-builder; its predicates fail for any
    /// non-Windows target.
    pub fn win(self) -> WinConstraint<T> {
        WinConstraint::new(self)
    }

    /// Opens a Mac-scoped sub-builder; its predicates fail for any non-Mac
    /// target.
    pub fn mac(self) -> MacConstraint<T> {
        MacConstraint::new(self)
    }

    /// Opens a Linux-scoped sub-builder; its predicates fail for any
    /// non-Linux target.
    pub fn linux(self) -> LinuxConstraint<T> {
        LinuxConstraint::new(self)
    }

    /// Attaches `payload` to the current clause and opens a fresh one, so
    /// following predicates start a new alternative.
    pub fn pick(mut self, payload: T) -> Self {
        if self.clauses.is_empty() {
            self.clauses.push(Clause::new());
        }
        let last = self.clauses.len() - 1;
        self.clauses[last].payload = Some(payload);
        self.or()
    }

    /// Closes the current clause and starts a new alternative.
    pub fn or(mut self) -> Self {
        self.clauses.push(Clause::new());
        self
    }

    /// Whether any clause is fully satisfied by `target`. A constraint with
    /// no effective clauses is vacuously true.
    pub fn check(&self, target: &Os) -> bool {
        let mut saw_clause = false;
        for clause in self.clauses.iter().filter(|clause| clause.is_effective()) {
            saw_clause = true;
            if clause.matches(target) {
                return true;
            }
        }
        !saw_clause
    }

    /// [`check`](Self::check) against the current operating system.
    pub fn check_current(&self) -> bool {
        self.check(current())
    }

    /// The payload of the first clause satisfied by `target`, else the
    /// fallback, else failure.
    pub fn get(&self, target: &Os) -> Result<&T> {
        let satisfied = self
            .clauses
            .iter()
            .filter(|clause| clause.payload.is_some())
            .find(|clause| clause.matches(target));

        match satisfied.and_then(|clause| clause.payload.as_ref()) {
            Some(payload) => Ok(payload),
            None => self.fallback.as_ref().ok_or_else(|| UnsupportedOsError::new(target)),
        }
    }

    /// [`get`](Self::get) against the current operating system.
    pub fn get_current(&self) -> Result<&T> {
        self.get(current())
    }

    /// Fails unless [`check`](Self::check) holds for `target`.
    pub fn enforce(&self, target: &Os) -> Result<()> {
        if self.check(target) {
            Ok(())
        } else {
            Err(UnsupportedOsError::new(target))
        }
    }

    /// [`enforce`](Self::enforce) against the current operating system.
    pub fn enforce_current(&self) -> Result<()> {
        self.enforce(current())
    }
}

impl<T> Default for OsConstraint<T> {
    fn default() -> Self {
        Self::new()
    }
}
