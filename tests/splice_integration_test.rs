mod common;

use common::Project;
use indoc::indoc;
use pretty_assertions::assert_eq;

const GENERATOR: &str = indoc! {r##"
    /**
     * Genera sprite de pelo corto - Tipo 2: Bob Cut
     * Estilo: Corte bob clásico a la altura de la mandíbula
     */
    export function generateHairShort_02_BobCut(): string {
      return `
        <svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
          <rect x="40" y="0" width="8" height="8" fill="#808080"/>
        </svg>
      `;
    }

    /**
     * Genera sprite de pelo corto - Tipo 3: Buzz Cut
     */
    export function generateHairShort_03_BuzzCut(): string {
      return `<svg/>`;
    }
"##};

const BOB_FRAGMENT: &str = indoc! {r##"
    export function generateHairShort_02_BobCut(): string {
      return `
        <svg width="64" height="64" xmlns="http://www.w3.org/2000/svg" shape-rendering="crispEdges">
          <rect x="40" y="0" width="8" height="8" fill="#707070" class="colorizable-hair"/>
        </svg>
      `;
    }
"##};

fn config(jobs: &[(&str, &str, &str, &str, &str)]) -> String {
    jobs.iter()
        .map(|(target, fragment, function, comment, mode)| {
            format!(
                "[[splice.jobs]]\ntarget = \"{target}\"\nfragment = \"{fragment}\"\nfunction = \"{function}\"\ncomment = \"{comment}\"\nmode = \"{mode}\"\n\n"
            )
        })
        .collect()
}

#[test]
fn test_function_spliced_in_place() {
    let project = Project::new();
    project.write("lib/minecraft/component-generator.ts", GENERATOR);
    project.write("tmp/bob.ts", BOB_FRAGMENT);
    project.write(
        ".codemend.toml",
        &config(&[(
            "lib/minecraft/component-generator.ts",
            "tmp/bob.ts",
            "generateHairShort_02_BobCut",
            "Tipo 2: Bob Cut",
            "function",
        )]),
    );

    let result = project.run(&["splice"]);
    assert!(result.success(), "stderr: {}", result.stderr);

    let generated = project.read("lib/minecraft/component-generator.ts");
    assert!(generated.contains(" * Estilo: Corte bob clásico a la altura de la mandíbula\n */\nexport function generateHairShort_02_BobCut"));
    assert!(generated.contains("class=\"colorizable-hair\""));
    assert!(!generated.contains("fill=\"#808080\""));
    assert!(generated.contains("export function generateHairShort_03_BuzzCut(): string {\n  return `<svg/>`;\n}"));

    let second = project.run(&["splice"]);
    assert!(second.success());
    assert!(second.stdout.contains("0 files modified"));
    assert_eq!(project.read("lib/minecraft/component-generator.ts"), generated);
}

#[test]
fn test_template_mode_keeps_interpolations_literal() {
    let project = Project::new();
    project.write("lib/minecraft/component-generator.ts", GENERATOR);
    project.write("tmp/buzz.svg", "    <svg data-tone=\"${tone}\"/>\n");
    project.write(
        ".codemend.toml",
        &config(&[(
            "lib/minecraft/component-generator.ts",
            "tmp/buzz.svg",
            "generateHairShort_03_BuzzCut",
            "Tipo 3: Buzz Cut",
            "template",
        )]),
    );

    let result = project.run(&["splice"]);
    assert!(result.success(), "stderr: {}", result.stderr);

    let generated = project.read("lib/minecraft/component-generator.ts");
    assert!(generated.contains(
        "export function generateHairShort_03_BuzzCut(): string {\n  return `\n    <svg data-tone=\"${tone}\"/>\n  `;\n}"
    ));
}

#[test]
fn test_missing_anchor_exits_nonzero_and_stops_writing() {
    let project = Project::new();
    project.write("lib/minecraft/component-generator.ts", GENERATOR);
    project.write("lib/minecraft/hairstyles-library.ts", GENERATOR);
    project.write("tmp/bob.ts", BOB_FRAGMENT);
    project.write(
        ".codemend.toml",
        &config(&[
            (
                "lib/minecraft/component-generator.ts",
                "tmp/bob.ts",
                "generateHairShort_02_BobCut",
                "Tipo 2: Bob Cut",
                "function",
            ),
            (
                "lib/minecraft/hairstyles-library.ts",
                "tmp/bob.ts",
                "generateHairShort_02_BobCut",
                "Tipo 2: Bob Cut",
                "function",
            ),
            (
                "lib/minecraft/hairstyles-library.ts",
                "tmp/bob.ts",
                "generateHairLong_09_Mermaid",
                "Tipo 9: Sirena",
                "function",
            ),
        ]),
    );

    let result = project.run(&["splice"]);
    assert!(!result.success());
    assert!(result.stderr.contains("generateHairLong_09_Mermaid"));

    // Written before the miss: stays written.
    assert!(project
        .read("lib/minecraft/component-generator.ts")
        .contains("colorizable-hair"));
    // Target of the failing job: untouched, even its earlier successful splice.
    assert_eq!(project.read("lib/minecraft/hairstyles-library.ts"), GENERATOR);
}

#[test]
fn test_missing_fragment_fails() {
    let project = Project::new();
    project.write("lib/minecraft/component-generator.ts", GENERATOR);
    project.write(
        ".codemend.toml",
        &config(&[(
            "lib/minecraft/component-generator.ts",
            "tmp/absent.ts",
            "generateHairShort_02_BobCut",
            "Tipo 2: Bob Cut",
            "function",
        )]),
    );

    let result = project.run(&["splice"]);
    assert!(!result.success());
    assert!(result.stderr.contains("absent.ts"));
    assert_eq!(project.read("lib/minecraft/component-generator.ts"), GENERATOR);
}
