//! Configuration access port trait.

pub trait ConfigPort {
    /// Raw value of `[section] key`, if set.
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Names of every section present.
    fn sections(&self) -> Vec<String>;
}
