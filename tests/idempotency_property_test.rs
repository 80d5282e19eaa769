//! Every script must leave its own output alone on a second run.

use codemend::commands::clean_scenes::{scene_passes, SCENE_CATEGORIES};
use codemend::commands::params_promise::rewrite_handler;
use codemend::commands::stats_mock::{backfill, STAT_FIELDS};
use codemend::rewrite::apply_all;
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

fn handler() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(ident(), 1..4),
        ident(),
        any::<bool>(),
    )
        .prop_map(|(keys, var, destructure)| {
            let fields = keys
                .iter()
                .map(|k| format!("{k}: string"))
                .collect::<Vec<_>>()
                .join("; ");
            let body = if destructure {
                format!("  const {{ {} }} = params;\n", keys.join(", "))
            } else {
                format!("  const {var} = params.{};\n", keys[0])
            };
            format!(
                "export async function GET(req: Request, {{ params }}: {{ params: {{ {fields} }} }}) {{\n{body}}}\n"
            )
        })
}

fn stats_mock() -> impl Strategy<Value = String> {
    prop::collection::vec((0..STAT_FIELDS.len(), 0u32..500), 0..10).prop_map(|picked| {
        let entries = picked
            .iter()
            .map(|(i, v)| format!("{}: {}", STAT_FIELDS[*i].0, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("vi.spyOn(S, 'getUserStats').mockResolvedValue({{ {entries} }}) as any;")
    })
}

proptest! {
    #[test]
    fn params_migration_is_idempotent(source in handler()) {
        let once = rewrite_handler(&source).into_owned();
        prop_assert!(once.contains("Promise<{"), "expected output to contain `Promise<{{`");
        prop_assert!(once.contains("await params;"));
        let twice = rewrite_handler(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stats_backfill_is_idempotent(source in stats_mock()) {
        let once = backfill(&source, "getUserStats").unwrap();
        let twice = backfill(&once, "getUserStats").unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn scene_cleaning_is_idempotent(
        idx in 0..SCENE_CATEGORIES.len(),
        form in 0..4usize,
    ) {
        let cat = SCENE_CATEGORIES[idx];
        let source = match form {
            0 => format!("{{ category: SceneCategory.{cat} }}"),
            1 => format!("{{ category: '{cat}' as SceneCategory }}"),
            2 => format!("{{ category: \"{cat}\" as const }}"),
            _ => format!("{{ category: '{cat}' }}"),
        };
        let categories: Vec<String> = SCENE_CATEGORIES.iter().map(|s| s.to_string()).collect();
        let passes = scene_passes(&categories).unwrap();

        let once = apply_all(&source, &passes).into_owned();
        prop_assert_eq!(&once, &format!("{{ category: \"{cat}\" }}"));
        let twice = apply_all(&once, &passes).into_owned();
        prop_assert_eq!(once, twice);
    }
}
