//! Blueprint types.

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

/// File name of the generated script inside the module directory.
pub const SCRIPT_FILE_NAME: &str = "build.gradle";

/// Dependency configuration used when a blueprint entry omits `method`.
pub const DEFAULT_METHOD: &str = "implementation";

/// A user-declared build type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildType {
    pub name: String,
    /// Free-form body, emitted line by line without interpretation.
    pub body: String,
}

impl BuildType {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// A product flavor, optionally bound to a flavor dimension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flavor {
    pub name: String,
    #[serde(default)]
    pub dimension: Option<String>,
}

impl Flavor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: None,
        }
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }
}

/// Dependency on another module of the same project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDependency {
    /// Configuration name, e.g. `implementation` or `api`.
    #[serde(default = "default_method")]
    pub method: String,
    /// Target module name, without the leading colon.
    pub module: String,
}

impl ModuleDependency {
    pub fn new(method: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            module: module.into(),
        }
    }
}

/// Dependency on an external library coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryDependency {
    #[serde(default = "default_method")]
    pub method: String,
    /// Maven coordinate, e.g. `androidx.appcompat:appcompat:1.0.2`.
    pub coordinate: String,
}

impl LibraryDependency {
    pub fn new(method: impl Into<String>, coordinate: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            coordinate: coordinate.into(),
        }
    }
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

/// Build configuration of one Android module.
///
/// Collections that a caller leaves out are simply empty; the generator does
/// not distinguish "absent" from "empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub package_name: String,
    /// Module directory, relative to the project root.
    pub path: PathBuf,
    pub compile_sdk_version: u32,
    pub min_sdk_version: u32,
    pub target_sdk_version: u32,
    pub is_application: bool,
    pub plugins: IndexSet<String>,
    pub build_types: Vec<BuildType>,
    pub product_flavors: Vec<Flavor>,
    pub flavor_dimensions: IndexSet<String>,
    pub enable_data_binding: bool,
    pub dependencies: Vec<ModuleDependency>,
    pub libraries: Vec<LibraryDependency>,
    pub extra_lines: Vec<String>,
}

impl Blueprint {
    /// Create a library module blueprint with the given SDK levels and no
    /// plugins, build types, flavors or dependencies.
    pub fn new(
        package_name: impl Into<String>,
        path: impl Into<PathBuf>,
        compile_sdk_version: u32,
        min_sdk_version: u32,
        target_sdk_version: u32,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            path: path.into(),
            compile_sdk_version,
            min_sdk_version,
            target_sdk_version,
            is_application: false,
            plugins: IndexSet::new(),
            build_types: Vec::new(),
            product_flavors: Vec::new(),
            flavor_dimensions: IndexSet::new(),
            enable_data_binding: false,
            dependencies: Vec::new(),
            libraries: Vec::new(),
            extra_lines: Vec::new(),
        }
    }

    pub fn application(mut self) -> Self {
        self.is_application = true;
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.insert(plugin.into());
        self
    }

    pub fn with_build_type(mut self, build_type: BuildType) -> Self {
        self.build_types.push(build_type);
        self
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.product_flavors.push(flavor);
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.flavor_dimensions.insert(dimension.into());
        self
    }

    pub fn with_data_binding(mut self, enabled: bool) -> Self {
        self.enable_data_binding = enabled;
        self
    }

    pub fn with_dependency(mut self, dependency: ModuleDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn with_library(mut self, library: LibraryDependency) -> Self {
        self.libraries.push(library);
        self
    }

    pub fn with_extra_line(mut self, line: impl Into<String>) -> Self {
        self.extra_lines.push(line.into());
        self
    }

    /// Location of the generated script: `<path>/build.gradle`.
    pub fn script_path(&self) -> PathBuf {
        self.path.join(SCRIPT_FILE_NAME)
    }

    /// Whether the `android` block needs a flavor section.
    pub fn has_flavor_section(&self) -> bool {
        !self.product_flavors.is_empty() || !self.flavor_dimensions.is_empty()
    }
}

/// On-disk layout of `module.toml`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct BlueprintFile {
    #[serde(default)]
    pub plugins: IndexSet<String>,
    #[serde(default)]
    pub flavor_dimensions: IndexSet<String>,
    #[serde(default)]
    pub extra_lines: Vec<String>,
    pub module: ModuleSection,
    pub sdk: SdkSection,
    #[serde(default)]
    pub build_types: IndexMap<String, BuildTypeSection>,
    #[serde(default)]
    pub flavors: Vec<Flavor>,
    #[serde(default)]
    pub dependencies: Vec<ModuleDependency>,
    #[serde(default)]
    pub libraries: Vec<LibraryDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ModuleSection {
    pub package: String,
    pub path: PathBuf,
    #[serde(default)]
    pub application: bool,
    #[serde(default)]
    pub data_binding: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SdkSection {
    pub compile: u32,
    pub min: u32,
    pub target: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BuildTypeSection {
    #[serde(default)]
    pub body: String,
}

impl From<BlueprintFile> for Blueprint {
    fn from(file: BlueprintFile) -> Self {
        Self {
            package_name: file.module.package,
            path: file.module.path,
            compile_sdk_version: file.sdk.compile,
            min_sdk_version: file.sdk.min,
            target_sdk_version: file.sdk.target,
            is_application: file.module.application,
            plugins: file.plugins,
            build_types: file
                .build_types
                .into_iter()
                .map(|(name, section)| BuildType::new(name, section.body))
                .collect(),
            product_flavors: file.flavors,
            flavor_dimensions: file.flavor_dimensions,
            enable_data_binding: file.module.data_binding,
            dependencies: file.dependencies,
            libraries: file.libraries,
            extra_lines: file.extra_lines,
        }
    }
}
