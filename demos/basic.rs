use anyhow::Result;
use kvmap::KvStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let kvs = KvStore::new();
    kvs.put("hello".to_string(), "world".to_string());
    let value = kvs.get(&"hello".to_string())?;
    assert_eq!(value, "world");
    kvs.update(&"hello".to_string(), "rust".to_string())?;
    kvs.dump();
    let removed = kvs.delete(&"hello".to_string())?;
    assert_eq!(removed, "rust");
    Ok(())
}
