/*
 * Input bindings
 *
 * The host owns a table of named triggers. Each trigger is bound to a
 * callback receiving the host context, so the core never registers itself
 * with a global listener.
 */
use super::error::SpiroError;
use std::collections::HashMap;

pub const RESTART: &str = "restart";
pub const TOGGLE: &str = "toggle";
pub const SAVE: &str = "save";

pub type Callback<C> = Box<dyn FnMut(&mut C) -> Result<(), SpiroError>>;

pub struct KeyBindings<C> {
    table: HashMap<String, Callback<C>>,
}

impl<C> KeyBindings<C> {
    pub fn new() -> KeyBindings<C> {
        KeyBindings {
            table: HashMap::new(),
        }
    }

    /// Replaces any callback already bound to this trigger.
    pub fn bind<F>(&mut self, trigger: &str, callback: F) -> &mut KeyBindings<C>
    where
        F: FnMut(&mut C) -> Result<(), SpiroError> + 'static,
    {
        self.table.insert(trigger.to_owned(), Box::new(callback));
        self
    }

    pub fn is_bound(&self, trigger: &str) -> bool {
        self.table.contains_key(trigger)
    }

    pub fn get_triggers(&self) -> Vec<&str> {
        let mut triggers: Vec<&str> = self.table.keys().map(|k| k.as_str()).collect();
        triggers.sort_unstable();
        triggers
    }

    /*
     * Returns Ok(false) when nothing is bound to the trigger, errors from
     * the callback are passed through.
     */
    pub fn dispatch(&mut self, trigger: &str, context: &mut C) -> Result<bool, SpiroError> {
        match self.table.get_mut(trigger) {
            Some(callback) => {
                callback(context)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<C> Default for KeyBindings<C> {
    fn default() -> Self {
        KeyBindings::new()
    }
}
