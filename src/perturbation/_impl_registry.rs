use crate::perturbation::{
    EdgeDeletion, EdgeInsertion, EdgeReplacement, LabelSwitching, Perturbation,
    PerturbationRegistry,
};
use std::collections::BTreeMap;

impl PerturbationRegistry {
    /// Registry without any operators.
    pub fn new() -> PerturbationRegistry {
        PerturbationRegistry {
            operators: BTreeMap::new(),
        }
    }

    /// Registry with all built-in operators.
    pub fn with_defaults() -> PerturbationRegistry {
        let mut registry = PerturbationRegistry::new();
        registry.register(Box::new(LabelSwitching));
        registry.register(Box::new(EdgeDeletion));
        registry.register(Box::new(EdgeInsertion));
        registry.register(Box::new(EdgeReplacement));
        registry
    }

    /// Add an operator under its [Perturbation::name], replacing any operator of that name.
    pub fn register(&mut self, operator: Box<dyn Perturbation>) {
        self.operators.insert(operator.name(), operator);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Perturbation> {
        self.operators.get(name).map(|it| it.as_ref())
    }

    /// Names of all registered operators, in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operators.keys().cloned()
    }

    /// One line per operator with its name and parameter documentation.
    pub fn help(&self) -> String {
        let mut help = String::from("Available operators:\n");
        for (name, operator) in &self.operators {
            help.push_str(&format!("  {:<18} {}\n", name, operator.parameters_help()));
        }
        help
    }
}

impl Default for PerturbationRegistry {
    fn default() -> Self {
        PerturbationRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use crate::perturbation::PerturbationRegistry;

    #[test]
    fn default_operators() {
        let registry = PerturbationRegistry::with_defaults();
        assert_eq!(
            vec![
                "edge-deletion",
                "edge-insertion",
                "edge-replacement",
                "label-switching"
            ],
            registry.names().collect::<Vec<_>>()
        );
        for name in registry.names() {
            assert_eq!(name, registry.get(name).unwrap().name());
            assert!(registry.help().contains(name));
        }
        assert!(registry.get("help").is_none());
        assert!(PerturbationRegistry::new().get("edge-deletion").is_none());
    }
}
