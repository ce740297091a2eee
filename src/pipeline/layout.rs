//! The fixed step list that assembles the npm package.

use std::path::PathBuf;

use super::step::{BuildStep, FileFilter};

/// Test files that must never ship in the package.
const TEST_SUFFIXES: [&str; 2] = [".test.mjs", ".test.js"];

/// Where the package is built from and to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    /// Source tree, holding `govuk/` and `govuk-prototype-kit/`.
    pub source: PathBuf,
    /// Package output tree, mirrored from `source`.
    pub destination: PathBuf,
    /// Stats output directory, cleared before each build.
    pub stats: PathBuf,
}

/// Returns the package build steps, in the order they must run.
pub fn package_pipeline(layout: &PackageLayout) -> Vec<BuildStep> {
    let src = layout.source.join("govuk");
    let dest = layout.destination.join("govuk");

    vec![
        BuildStep::clean("clean:stats", &layout.stats),
        BuildStep::clean("clean:package", &layout.destination),
        BuildStep::copy(
            "assets",
            src.join("assets"),
            dest.join("assets"),
            FileFilter::all(),
        ),
        BuildStep::copy(
            "fixtures",
            src.join("components"),
            dest.join("components"),
            FileFilter::suffixes(&["fixtures.json"]),
        ),
        BuildStep::copy(
            "scripts",
            &src,
            &dest,
            FileFilter::suffixes(&[".mjs", ".js"]).excluding(&TEST_SUFFIXES),
        ),
        BuildStep::copy(
            "styles",
            &src,
            &dest,
            FileFilter::suffixes(&[".scss"]).excluding(&[".test.scss"]),
        ),
        BuildStep::copy("templates", &src, &dest, FileFilter::suffixes(&[".njk"])),
        BuildStep::copy(
            "prototype-kit",
            layout.source.join("govuk-prototype-kit"),
            layout.destination.join("govuk-prototype-kit"),
            FileFilter::suffixes(&[".js"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PackageLayout {
        PackageLayout {
            source: PathBuf::from("pkg/src"),
            destination: PathBuf::from("pkg/dist"),
            stats: PathBuf::from("stats/dist"),
        }
    }

    #[test]
    fn steps_run_in_fixed_order() {
        let names: Vec<_> = package_pipeline(&layout())
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "clean:stats",
                "clean:package",
                "assets",
                "fixtures",
                "scripts",
                "styles",
                "templates",
                "prototype-kit"
            ]
        );
    }

    #[test]
    fn stats_directory_is_cleaned_first() {
        assert_eq!(
            package_pipeline(&layout())[0],
            BuildStep::clean("clean:stats", "stats/dist")
        );
    }

    #[test]
    fn prototype_kit_is_mirrored() {
        let steps = package_pipeline(&layout());
        let BuildStep::Copy { from, to, filter, .. } = &steps[7] else {
            panic!("expected copy step");
        };
        assert_eq!(from, &PathBuf::from("pkg/src/govuk-prototype-kit"));
        assert_eq!(to, &PathBuf::from("pkg/dist/govuk-prototype-kit"));
        assert_eq!(filter, &FileFilter::suffixes(&[".js"]));
    }
}
