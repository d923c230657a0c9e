use anyhow::Result;
use kvmap::KvStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    std::fs::create_dir_all("data")?;

    let kvs = KvStore::new();
    kvs.put("T1".to_string(), "Test1".to_string());
    kvs.put("T2".to_string(), "Test2".to_string());
    kvs.save("data/store.bin")?;

    kvs.update(&"T2".to_string(), "Other".to_string())?;
    kvs.load("data/store.bin")?;
    assert_eq!(kvs.get(&"T2".to_string())?, "Test2");
    kvs.dump();
    Ok(())
}
