//! Translation from a [`Blueprint`] to a build script tree.
//!
//! Every block is produced by its own function. Blocks that are only emitted
//! under some condition return `Option<Statement>`; callers list them in
//! output order and flatten, so the order below is the order in the script.

use modgen_blueprint::{Blueprint, Flavor};

use crate::ast::{Script, Statement, quoted, single_quoted};

pub const VERSION_CODE: &str = "1";
pub const VERSION_NAME: &str = "1.0";
pub const TEST_INSTRUMENTATION_RUNNER: &str = "androidx.test.runner.AndroidJUnitRunner";
pub const RELEASE_BUILD_TYPE: &str = "release";
pub const PROGUARD_FILES: &str =
    "getDefaultProguardFile('proguard-android-optimize.txt'), 'proguard-rules.pro'";
pub const JAVA_VERSION: &str = "1.8";
pub const FILE_TREE: &str = "fileTree(dir: 'libs', include: ['*.jar'])";

/// Build the statement tree for one module.
///
/// Order: `apply plugin` lines, `android`, `dependencies`, extra lines.
pub fn build_script(blueprint: &Blueprint) -> Script {
    let mut statements: Vec<Statement> = blueprint
        .plugins
        .iter()
        .map(|plugin| apply_plugin(plugin))
        .collect();
    statements.push(android(blueprint));
    statements.push(dependencies(blueprint));
    statements.extend(blueprint.extra_lines.iter().map(Statement::line));
    Script::new(statements)
}

fn apply_plugin(plugin: &str) -> Statement {
    Statement::key_value("apply plugin:", single_quoted(plugin))
}

fn android(blueprint: &Blueprint) -> Statement {
    let mut children: Vec<Statement> = [
        Some(Statement::key_value(
            "compileSdkVersion",
            blueprint.compile_sdk_version.to_string(),
        )),
        Some(default_config(blueprint)),
        Some(build_types(blueprint)),
        data_binding(blueprint),
        Some(compile_options()),
    ]
    .into_iter()
    .flatten()
    .collect();
    children.extend(flavor_section(blueprint));
    Statement::block("android", children)
}

fn default_config(blueprint: &Blueprint) -> Statement {
    let application_id = blueprint
        .is_application
        .then(|| Statement::key_value("applicationId", quoted(&blueprint.package_name)));

    let children = [
        application_id,
        Some(Statement::key_value(
            "minSdkVersion",
            blueprint.min_sdk_version.to_string(),
        )),
        Some(Statement::key_value(
            "targetSdkVersion",
            blueprint.target_sdk_version.to_string(),
        )),
        Some(Statement::key_value("versionCode", VERSION_CODE)),
        Some(Statement::key_value("versionName", quoted(VERSION_NAME))),
        Some(Statement::key_value("multiDexEnabled", "true")),
        Some(Statement::key_value(
            "testInstrumentationRunner",
            quoted(TEST_INSTRUMENTATION_RUNNER),
        )),
    ]
    .into_iter()
    .flatten()
    .collect();

    Statement::block("defaultConfig", children)
}

/// `release` is always synthesized first. A user build type with the same
/// name is emitted as well; the `duplicate-release` lint reports it.
fn build_types(blueprint: &Blueprint) -> Statement {
    let release = Statement::block(
        RELEASE_BUILD_TYPE,
        vec![
            Statement::key_value("minifyEnabled", "false"),
            Statement::key_value("proguardFiles", PROGUARD_FILES),
        ],
    );

    let declared = blueprint.build_types.iter().map(|build_type| {
        Statement::block(
            build_type.name.as_str(),
            build_type.body.lines().map(Statement::line).collect(),
        )
    });

    Statement::block("buildTypes", std::iter::once(release).chain(declared).collect())
}

fn data_binding(blueprint: &Blueprint) -> Option<Statement> {
    blueprint
        .enable_data_binding
        .then(|| Statement::block("dataBinding", vec![Statement::line("enabled = true")]))
}

fn compile_options() -> Statement {
    Statement::block(
        "compileOptions",
        vec![
            Statement::key_value("targetCompatibility", JAVA_VERSION),
            Statement::key_value("sourceCompatibility", JAVA_VERSION),
        ],
    )
}

/// `flavorDimensions` (when any) followed by `productFlavors`; nothing at all
/// when the blueprint declares neither flavors nor dimensions.
fn flavor_section(blueprint: &Blueprint) -> Vec<Statement> {
    if !blueprint.has_flavor_section() {
        return Vec::new();
    }

    let dimensions = (!blueprint.flavor_dimensions.is_empty()).then(|| {
        let names = blueprint
            .flavor_dimensions
            .iter()
            .map(|dimension| quoted(dimension))
            .collect::<Vec<_>>()
            .join(", ");
        Statement::key_value("flavorDimensions", names)
    });

    let flavors = Statement::block(
        "productFlavors",
        blueprint.product_flavors.iter().map(flavor).collect(),
    );

    [dimensions, Some(flavors)].into_iter().flatten().collect()
}

fn flavor(flavor: &Flavor) -> Statement {
    let children = flavor
        .dimension
        .iter()
        .map(|dimension| Statement::key_value("dimension", quoted(dimension)))
        .collect();
    Statement::block(flavor.name.as_str(), children)
}

fn dependencies(blueprint: &Blueprint) -> Statement {
    let file_tree = Statement::key_value("implementation", FILE_TREE);

    let modules = blueprint.dependencies.iter().map(|dependency| {
        Statement::key_value(
            dependency.method.as_str(),
            format!("project(':{}')", dependency.module),
        )
    });

    let libraries = blueprint
        .libraries
        .iter()
        .map(|library| Statement::key_value(library.method.as_str(), quoted(&library.coordinate)));

    Statement::block(
        "dependencies",
        std::iter::once(file_tree)
            .chain(modules)
            .chain(libraries)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use modgen_blueprint::{BuildType, LibraryDependency, ModuleDependency};
    use modgen_core::Indent;

    use super::*;
    use crate::ast::find_block;

    fn blueprint() -> Blueprint {
        Blueprint::new("com.example.app", "app", 28, 21, 28)
    }

    fn android_children(script: &Script) -> &[Statement] {
        script.block("android").expect("android block")
    }

    fn names(statements: &[Statement]) -> Vec<&str> {
        statements
            .iter()
            .map(|statement| match statement {
                Statement::Line(text) => text.as_str(),
                Statement::KeyValue { key, .. } => key.as_str(),
                Statement::Block { name, .. } => name.as_str(),
            })
            .collect()
    }

    #[test]
    fn test_top_level_order() {
        let script = build_script(
            &blueprint()
                .with_plugin("com.android.library")
                .with_plugin("kotlin-android")
                .with_extra_line("apply from: 'a.gradle'")
                .with_extra_line("apply from: 'b.gradle'"),
        );

        assert_eq!(
            names(script.statements()),
            [
                "apply plugin:",
                "apply plugin:",
                "android",
                "dependencies",
                "apply from: 'a.gradle'",
                "apply from: 'b.gradle'",
            ]
        );
        assert_eq!(
            script.statements()[1],
            Statement::key_value("apply plugin:", "'kotlin-android'")
        );
    }

    #[test]
    fn test_no_plugins_no_apply_lines() {
        let script = build_script(&blueprint());
        assert_eq!(names(script.statements()), ["android", "dependencies"]);
    }

    #[test]
    fn test_android_order_with_everything() {
        let script = build_script(
            &blueprint()
                .with_data_binding(true)
                .with_dimension("tier")
                .with_flavor(Flavor::new("free").with_dimension("tier")),
        );

        assert_eq!(
            names(android_children(&script)),
            [
                "compileSdkVersion",
                "defaultConfig",
                "buildTypes",
                "dataBinding",
                "compileOptions",
                "flavorDimensions",
                "productFlavors",
            ]
        );
    }

    #[test]
    fn test_application_id_only_for_applications() {
        let app = build_script(&blueprint().application());
        let config = find_block(android_children(&app), "defaultConfig").unwrap();
        assert_eq!(
            config[0],
            Statement::key_value("applicationId", "\"com.example.app\"")
        );
        assert_eq!(config.len(), 7);

        let lib = build_script(&blueprint());
        let config = find_block(android_children(&lib), "defaultConfig").unwrap();
        assert_eq!(
            names(config),
            [
                "minSdkVersion",
                "targetSdkVersion",
                "versionCode",
                "versionName",
                "multiDexEnabled",
                "testInstrumentationRunner",
            ]
        );
    }

    #[test]
    fn test_data_binding_absent_when_disabled() {
        let script = build_script(&blueprint().with_data_binding(false));
        assert!(find_block(android_children(&script), "dataBinding").is_none());

        let script = build_script(&blueprint().with_data_binding(true));
        assert_eq!(
            find_block(android_children(&script), "dataBinding").unwrap(),
            [Statement::line("enabled = true")]
        );
    }

    #[test]
    fn test_release_is_synthesized_first() {
        let script = build_script(
            &blueprint()
                .with_build_type(BuildType::new("debug", "debuggable true\nminifyEnabled false"))
                .with_build_type(BuildType::new("release", "debuggable false")),
        );

        let build_types = find_block(android_children(&script), "buildTypes").unwrap();
        assert_eq!(names(build_types), ["release", "debug", "release"]);

        let debug = find_block(&build_types[1..], "debug").unwrap();
        assert_eq!(
            debug,
            [
                Statement::line("debuggable true"),
                Statement::line("minifyEnabled false")
            ]
        );
    }

    fn declared_build_type(body: &str) -> Vec<Statement> {
        let script = build_script(&blueprint().with_build_type(BuildType::new("qa", body)));
        let build_types = find_block(android_children(&script), "buildTypes").unwrap();
        find_block(build_types, "qa").unwrap().to_vec()
    }

    #[test]
    fn test_empty_build_type_body() {
        assert!(declared_build_type("").is_empty());

        let script = build_script(&blueprint().with_build_type(BuildType::new("qa", "")));
        assert!(script.render(Indent::GRADLE).contains("\n        qa {\n\n        }\n"));
    }

    #[test]
    fn test_build_type_body_crlf() {
        assert_eq!(
            declared_build_type("debuggable true\r\nminifyEnabled false\r\n"),
            [
                Statement::line("debuggable true"),
                Statement::line("minifyEnabled false")
            ]
        );
    }

    #[test]
    fn test_build_type_body_blank_interior_line() {
        assert_eq!(
            declared_build_type("debuggable true\n\n  jniDebuggable true"),
            [
                Statement::line("debuggable true"),
                Statement::line(""),
                Statement::line("  jniDebuggable true")
            ]
        );

        let build_type = BuildType::new("qa", "debuggable true\n\nzipAlignEnabled");
        let text = build_script(&blueprint().with_build_type(build_type)).render(Indent::GRADLE);
        assert!(text.contains("            debuggable true\n            \n            zipAlignEnabled\n"));
    }

    #[test]
    fn test_flavor_section_suppressed() {
        let script = build_script(&blueprint());
        let android = android_children(&script);
        assert_eq!(names(android).last(), Some(&"compileOptions"));
    }

    #[test]
    fn test_dimensions_without_flavors() {
        let script = build_script(&blueprint().with_dimension("tier").with_dimension("abi"));
        let android = android_children(&script);

        assert!(android.contains(&Statement::key_value("flavorDimensions", "\"tier\", \"abi\"")));
        assert!(find_block(android, "productFlavors").unwrap().is_empty());
    }

    #[test]
    fn test_flavors_without_dimensions() {
        let script = build_script(&blueprint().with_flavor(Flavor::new("free")));
        let android = android_children(&script);

        assert!(!names(android).contains(&"flavorDimensions"));
        let flavors = find_block(android, "productFlavors").unwrap();
        assert_eq!(flavors, [Statement::block("free", vec![])]);
    }

    #[test]
    fn test_flavor_dimension_child() {
        let script = build_script(
            &blueprint()
                .with_dimension("tier")
                .with_flavor(Flavor::new("paid").with_dimension("tier")),
        );
        let flavors = find_block(android_children(&script), "productFlavors").unwrap();
        assert_eq!(
            flavors,
            [Statement::block(
                "paid",
                vec![Statement::key_value("dimension", "\"tier\"")]
            )]
        );
    }

    #[test]
    fn test_dependencies_order() {
        let script = build_script(
            &blueprint()
                .with_library(LibraryDependency::new(
                    "implementation",
                    "com.squareup:okhttp:3.12.0",
                ))
                .with_dependency(ModuleDependency::new("api", "core")),
        );

        assert_eq!(
            script.block("dependencies").unwrap(),
            [
                Statement::key_value("implementation", FILE_TREE),
                Statement::key_value("api", "project(':core')"),
                Statement::key_value("implementation", "\"com.squareup:okhttp:3.12.0\""),
            ]
        );
    }
}
