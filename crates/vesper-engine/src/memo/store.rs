use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Lazily-populated map from name to a single shared instance.
pub struct Memo<T> {
    entries: RefCell<HashMap<String, Rc<T>>>,
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self { entries: RefCell::new(HashMap::new()) }
    }

    /// Returns the instance for `name`, if one was created.
    pub fn get(&self, name: &str) -> Option<Rc<T>> {
        self.entries.borrow().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns the instance for `name`, creating it with `make(name)` first if needed.
    pub fn get_or_insert_with(&self, name: &str, make: impl FnOnce(&str) -> T) -> Rc<T> {
        match self.get_or_try_insert_with(name, |n| Ok::<T, std::convert::Infallible>(make(n))) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with), but construction
    /// may fail. A failed construction leaves the store unchanged.
    ///
    /// `make` runs without the store borrowed, so it may look up other names.
    pub fn get_or_try_insert_with<E>(
        &self,
        name: &str,
        make: impl FnOnce(&str) -> Result<T, E>,
    ) -> Result<Rc<T>, E> {
        if let Some(existing) = self.get(name) {
            return Ok(existing);
        }

        let created = Rc::new(make(name)?);

        // `make` may have registered the same name through re-entry; first one wins.
        let mut entries = self.entries.borrow_mut();
        let entry = entries.entry(name.to_owned()).or_insert(created);
        Ok(Rc::clone(entry))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Debug)]
    struct Named(String);

    fn named(name: &str) -> Named {
        Named(name.to_owned())
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn same_name_yields_same_instance() {
        let memo = Memo::new();
        let a1 = memo.get_or_insert_with("a", named);
        let a2 = memo.get_or_insert_with("a", named);
        assert!(Rc::ptr_eq(&a1, &a2));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn different_names_yield_distinct_instances() {
        let memo = Memo::new();
        let a = memo.get_or_insert_with("a", named);
        let b = memo.get_or_insert_with("b", named);
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(a.0, "a");
        assert_eq!(b.0, "b");
    }

    #[test]
    fn name_is_the_constructor_argument() {
        let memo = Memo::new();
        assert_eq!(memo.get_or_insert_with("main", named).0, "main");
    }

    // ── laziness ──────────────────────────────────────────────────────────

    #[test]
    fn constructor_runs_once_per_name() {
        let calls = Cell::new(0);
        let memo = Memo::new();
        for _ in 0..3 {
            memo.get_or_insert_with("x", |n| {
                calls.set(calls.get() + 1);
                named(n)
            });
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn lookup_without_insert_creates_nothing() {
        let memo: Memo<Named> = Memo::new();
        assert!(memo.get("a").is_none());
        assert!(!memo.contains("a"));
        assert!(memo.is_empty());
    }

    #[test]
    fn entries_outlive_caller_handles() {
        let memo = Memo::new();
        let first = memo.get_or_insert_with("a", named);
        let ptr = Rc::as_ptr(&first);
        drop(first);
        assert_eq!(Rc::as_ptr(&memo.get_or_insert_with("a", named)), ptr);
    }

    // ── fallible construction ─────────────────────────────────────────────

    #[test]
    fn failed_construction_stores_nothing() {
        let memo: Memo<Named> = Memo::new();
        let res = memo.get_or_try_insert_with("bad", |_| Err("no display"));
        assert_eq!(res.unwrap_err(), "no display");
        assert!(!memo.contains("bad"));

        let ok = memo.get_or_try_insert_with("bad", |n| Ok::<_, &str>(named(n)));
        assert_eq!(ok.unwrap().0, "bad");
    }

    #[test]
    fn constructor_may_use_the_store() {
        let memo: Memo<Named> = Memo::new();
        let outer = memo.get_or_insert_with("outer", |n| {
            memo.get_or_insert_with("inner", named);
            named(n)
        });
        assert_eq!(outer.0, "outer");
        assert_eq!(memo.len(), 2);
    }
}
