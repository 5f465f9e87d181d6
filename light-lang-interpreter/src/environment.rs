use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
pub struct EnvironmentCore {
    store: HashMap<Rc<str>, Rc<Object>>,
    outer: Option<Environment>,
}

/// A shared handle to one scope. Cloning the handle does not copy the scope,
/// so functions capturing an environment observe later bindings made in it.
#[derive(Clone)]
pub struct Environment {
    pub(crate) environment: Rc<RefCell<EnvironmentCore>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            environment: Rc::new(RefCell::new(EnvironmentCore::default())),
        }
    }

    pub fn new_enclosed(outer: Environment) -> Environment {
        Environment {
            environment: Rc::new(RefCell::new(EnvironmentCore {
                store: HashMap::new(),
                outer: Some(outer),
            })),
        }
    }

    /// Looks `key` up in this scope, then in each enclosing one.
    pub fn get(&self, key: &str) -> Option<Rc<Object>> {
        let env = self.environment.borrow();
        env.store
            .get(key)
            .cloned()
            .or_else(|| env.outer.as_ref().and_then(|outer| outer.get(key)))
    }

    /// Binds `key` in this scope only, shadowing any outer binding.
    pub fn set(&mut self, key: Rc<str>, value: Rc<Object>) {
        self.environment.borrow_mut().store.insert(key, value);
    }

    pub fn contains_local(&self, key: &str) -> bool {
        self.environment.borrow().store.contains_key(key)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.environment, &other.environment)
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // bindings may hold functions that capture this environment, so only
        // the names are printed
        let env = self.environment.borrow();
        let mut names = env.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("enclosed", &env.outer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::object::Object;

    #[test]
    fn test_lookup_walks_outward() {
        let mut outer = Environment::new();
        outer.set("a".into(), Object::integer(1));
        let mut inner = Environment::new_enclosed(outer.clone());
        inner.set("b".into(), Object::integer(2));

        assert_eq!(inner.get("a"), Some(Object::integer(1)));
        assert_eq!(inner.get("b"), Some(Object::integer(2)));
        assert_eq!(outer.get("b"), None);
        assert_eq!(inner.get("c"), None);
    }

    #[test]
    fn test_set_shadows_instead_of_assigning_through() {
        let mut outer = Environment::new();
        outer.set("x".into(), Object::integer(1));
        let mut inner = Environment::new_enclosed(outer.clone());
        inner.set("x".into(), Object::integer(2));

        assert_eq!(inner.get("x"), Some(Object::integer(2)));
        assert_eq!(outer.get("x"), Some(Object::integer(1)));
        assert!(inner.contains_local("x"));
        assert!(!inner.contains_local("y"));
    }

    #[test]
    fn test_clones_share_the_scope() {
        let env = Environment::new();
        let mut handle = env.clone();
        handle.set("late".into(), Object::boolean(true));

        assert_eq!(env.get("late"), Some(Object::boolean(true)));
        assert_eq!(env, handle);
        assert_ne!(env, Environment::new());
    }
}
