// Catalog building against real directory trees.
mod support;

use anyhow::Result;
use spellcat::{CatalogCache, CatalogError, resolve};
use std::path::PathBuf;
use support::{DictTree, dictionary_keys, dictionary_names, module_names};

fn populated_tree() -> Result<DictTree> {
    let tree = DictTree::new()?;
    let extra = tree.dir("extra")?;
    tree.write(
        "data/myspell.asmi",
        format!(
            "# hunspell-compatible module\norder-num 0.3\nlib-dir /opt/myspell\ndict-exts .multi, .hun\ndict-dirs {}\n",
            extra.display()
        ),
    )?;
    tree.write("data/en_US.multi", "/words/en_US.rws\n")?;
    tree.write("data/en-GB-myspell-60.multi", "/words/en_GB.rws ize\n")?;
    tree.write("data/de-neu-80.hun", "/words/de.rws\n")?;
    tree.write("data/pt_br-myspell.awli", "word list body\n")?;
    tree.write("data/README", "not a dictionary\n")?;
    tree.write("data/1x-foo.multi", "")?;
    tree.write("data/english.multi", "")?;
    tree.write("data/.multi", "")?;
    tree.write("extra/en-ize.multi", "/words/en_ize.rws\n")?;
    Ok(tree)
}

#[test]
fn builds_sorted_catalog_from_search_dirs() -> Result<()> {
    let tree = populated_tree()?;
    let config = tree.config(&["data"], &["data"]);
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&config.search_dirs())?;

    assert_eq!(module_names(snapshot), vec!["myspell", "default"]);
    let myspell = snapshot.modules().find("myspell").expect("myspell module");
    assert_eq!(myspell.lib_dir.as_deref(), Some("/opt/myspell"));

    assert_eq!(
        snapshot.dict_dirs(),
        &[tree.path_string("data"), tree.path_string("extra")]
    );
    let suffixes: Vec<_> = snapshot
        .extensions()
        .iter()
        .map(|b| b.suffix.as_str())
        .collect();
    assert_eq!(suffixes, vec![".awli", ".multi", ".hun", ".multi"]);

    assert_eq!(
        dictionary_keys(snapshot),
        vec![
            "de|neu|80|myspell",
            "en|GB|60|myspell",
            "en|ize|60|myspell",
            "en_US||60|myspell",
            "pt_BR||60|myspell",
        ]
    );
    assert_eq!(
        dictionary_names(snapshot),
        vec!["de-neu-80", "en-GB-myspell-60", "en-ize", "en_US", "pt_BR"]
    );
    assert!(snapshot.rejections().is_empty());
    Ok(())
}

#[test]
fn direct_and_indirect_entries_resolve() -> Result<()> {
    let tree = populated_tree()?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["data"]))?;
    let dictionaries = snapshot.dictionaries();

    let direct = dictionaries.find("pt_BR").expect("direct entry");
    assert!(direct.direct);
    let resolved = resolve(direct)?;
    assert_eq!(resolved.main_word_list, tree.root().join("data/pt_br-myspell.awli"));
    assert_eq!(resolved.flags, "");

    let indirect = dictionaries.find("en-GB-myspell-60").expect("indirect entry");
    assert!(!indirect.direct);
    let resolved = resolve(indirect)?;
    assert_eq!(resolved.main_word_list, PathBuf::from("/words/en_GB.rws"));
    assert_eq!(resolved.flags, "ize");
    Ok(())
}

#[test]
fn empty_info_file_fails_resolution_only() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("data/en.multi", "")?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["data"]))?;

    let entry = snapshot.dictionaries().find("en").expect("entry built");
    match resolve(entry) {
        Err(CatalogError::BadFileFormat { path, .. }) => {
            assert_eq!(path, tree.root().join("data/en.multi"))
        }
        other => panic!("expected bad_file_format, got {other:?}"),
    }
    Ok(())
}

#[test]
fn rejected_definitions_leave_other_modules_alone() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("data/zero.asmi", "order-num 0\ndict-exts .zero\n")?;
    tree.write("data/one.asmi", "order-num 1.0\n")?;
    tree.write("data/odd.asmi", "order-num 0.2\nflavour vanilla\n")?;
    tree.write("data/good.asmi", "order-num 0.7\ndict-exts .good\n")?;
    tree.write("data/en.zero", "")?;
    tree.write("data/en.good", "")?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["data"]))?;

    assert_eq!(module_names(snapshot), vec!["default", "good"]);
    assert_eq!(dictionary_keys(snapshot), vec!["en||60|good"]);

    let mut kinds: Vec<_> = snapshot
        .rejections()
        .iter()
        .map(|r| (r.source.rsplit('/').next().unwrap_or_default().to_string(), r.kind))
        .collect();
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            ("odd.asmi".to_string(), "unknown_key"),
            ("one.asmi".to_string(), "bad_value"),
            ("zero.asmi".to_string(), "bad_value"),
        ]
    );
    Ok(())
}

#[test]
fn equal_order_nums_put_later_modules_first() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("data/alpha.asmi", "order-num 0.50\n")?;
    tree.write("data/beta.asmi", "order-num 0.5\n")?;
    tree.write("data/gamma.asmi", "order-num 0.25\n")?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["data"]))?;

    assert_eq!(
        module_names(snapshot),
        vec!["gamma", "beta", "alpha", "default"]
    );
    Ok(())
}

#[test]
fn direct_file_naming_unknown_module_is_skipped_and_reported() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("data/en-nosuch.awli", "")?;
    tree.write("data/en-default.awli", "")?;
    tree.write("data/fr.multi", "")?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["data"]))?;

    assert_eq!(dictionary_keys(snapshot), vec!["en||60|default", "fr||60|default"]);
    assert_eq!(snapshot.rejections().len(), 1);
    assert_eq!(snapshot.rejections()[0].kind, "unknown_module");
    assert_eq!(snapshot.rejections()[0].source, "en-nosuch.awli");
    Ok(())
}

#[test]
fn missing_directories_are_not_errors() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("real/en.multi", "")?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["absent", "real", "also-absent"]))?;

    assert_eq!(dictionary_names(snapshot), vec!["en"]);
    assert_eq!(snapshot.dict_dirs().len(), 3);
    Ok(())
}

#[test]
fn same_file_in_two_directories_keeps_reverse_arrival_order() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("first/en.multi", "")?;
    tree.write("second/en.multi", "")?;
    let mut cache = CatalogCache::new();
    let snapshot = cache.get(&tree.search_dirs(&["first", "second"]))?;

    let files: Vec<_> = snapshot
        .dictionaries()
        .iter()
        .map(|e| e.info_file.clone())
        .collect();
    assert_eq!(
        files,
        vec![
            tree.root().join("second/en.multi"),
            tree.root().join("first/en.multi"),
        ]
    );
    Ok(())
}

#[test]
fn unreadable_definition_fails_the_whole_build() -> Result<()> {
    let tree = DictTree::new()?;
    tree.write("data/broken.asmi", [0xff, 0xfe, 0x00, 0x80])?;
    tree.write("data/en.multi", "")?;
    let mut cache = CatalogCache::new();
    let dirs = tree.search_dirs(&["data"]);

    let err = cache.get(&dirs).expect_err("invalid UTF-8 definition");
    assert_eq!(err.kind(), "io");
    let slot = cache.find(&dirs).expect("slot allocated");
    let snapshot = cache.snapshot(slot).expect("slot present");
    assert!(snapshot.is_empty());
    assert!(snapshot.dictionaries().is_empty());
    assert!(snapshot.extensions().is_empty());
    assert!(snapshot.dict_dirs().is_empty());
    Ok(())
}
