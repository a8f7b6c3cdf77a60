//! Builds a model from parsed descriptions.

use std::path::Path;

use dm_model::{
    MemberDescriptor, Model, ModelBuilder, ScopeIdx, ScopedRegistry, TypeDescriptor, TypeIdx,
};

use crate::schema::{ModelFile, TypeDef};
use crate::{LoadError, Origin};

/// Counts of descriptors a single load added to the model.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub scopes: usize,
    pub types: usize,
    pub members: usize,
}

/// Accumulates one model from any number of descriptions.
#[derive(Debug, Default)]
pub struct Loader {
    builder: ModelBuilder,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and load the description at `path`.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load_path(&mut self, path: &Path) -> Result<LoadSummary, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        self.load(&source, Origin::File(path.to_owned()))
    }

    /// Load a description held in memory.
    pub fn load_str(&mut self, source: &str) -> Result<LoadSummary, LoadError> {
        self.load(source, Origin::Inline)
    }

    fn load(&mut self, source: &str, origin: Origin) -> Result<LoadSummary, LoadError> {
        let file: ModelFile = serde_json::from_str(source).map_err(|source| LoadError::Json {
            origin: origin.clone(),
            source,
        })?;
        validate(&file, &origin)?;

        let before = self.counts();
        for assembly in file.assemblies {
            let scope = self.builder.add_scope(&assembly.name);
            for namespace in assembly.namespaces {
                for def in namespace.types {
                    self.add_type(scope, None, &namespace.name, def);
                }
            }
        }
        let after = self.counts();

        let summary = LoadSummary {
            scopes: after.scopes - before.scopes,
            types: after.types - before.types,
            members: after.members - before.members,
        };
        tracing::debug!(
            %origin,
            scopes = summary.scopes,
            types = summary.types,
            members = summary.members,
            "description loaded"
        );
        Ok(summary)
    }

    fn add_type(
        &mut self,
        scope: ScopeIdx,
        declaring: Option<TypeIdx>,
        namespace: &str,
        def: TypeDef,
    ) {
        let descriptor = TypeDescriptor::new(def.id, def.name, def.kind.into())
            .with_namespace(namespace)
            .with_bases(def.bases)
            .with_interfaces(def.interfaces);
        let ty = match declaring {
            Some(declaring) => self.builder.add_nested_type(declaring, descriptor),
            None => self.builder.add_type(scope, descriptor),
        };

        for member in def.members {
            let mut descriptor =
                MemberDescriptor::new(member.id, member.name, member.kind.into_kind());
            if let Some(overridden) = member.overrides {
                descriptor = descriptor.overriding(overridden);
            }
            self.builder.add_member(ty, descriptor);
        }
        for nested in def.nested_types {
            self.add_type(scope, Some(ty), namespace, nested);
        }
    }

    fn counts(&self) -> LoadSummary {
        let model = self.builder.model();
        LoadSummary {
            scopes: model.scope_count(),
            types: model.type_count(),
            members: model.member_count(),
        }
    }

    pub fn model(&self) -> &Model {
        self.builder.model()
    }

    /// Consume the loader, yielding the model and its registry.
    pub fn finish(self) -> (Model, ScopedRegistry) {
        self.builder.finish()
    }
}

/// Load every file in `paths` into one model, in order.
pub fn load_paths<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<(Model, ScopedRegistry), LoadError> {
    let mut loader = Loader::new();
    for path in paths {
        loader.load_path(path.as_ref())?;
    }
    Ok(loader.finish())
}

fn validate(file: &ModelFile, origin: &Origin) -> Result<(), LoadError> {
    for assembly in &file.assemblies {
        if assembly.name.is_empty() {
            return Err(LoadError::UnnamedAssembly {
                origin: origin.clone(),
            });
        }
        for namespace in &assembly.namespaces {
            for def in &namespace.types {
                validate_type(def, origin)?;
            }
        }
    }
    Ok(())
}

fn validate_type(def: &TypeDef, origin: &Origin) -> Result<(), LoadError> {
    if def.id.is_empty() {
        return Err(empty_id(origin, "type", &def.name));
    }
    if let Some(member) = def.members.iter().find(|member| member.id.is_empty()) {
        return Err(empty_id(origin, "member", &member.name));
    }
    def.nested_types
        .iter()
        .try_for_each(|nested| validate_type(nested, origin))
}

fn empty_id(origin: &Origin, what: &'static str, name: &str) -> LoadError {
    LoadError::EmptyIdentifier {
        origin: origin.clone(),
        what,
        name: name.to_owned(),
    }
}
