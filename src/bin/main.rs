use chain_table::logger::initialize_logger;
use chain_table::*;
use log::LevelFilter;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() -> Result<(), TableError> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    initialize_logger(LevelFilter::Info);

    let mut table = Table::new();
    table.insert(1, 100);
    table.insert(2, 200);
    table.insert(3, 300);
    table.insert(10, 400);

    print!("{}", table);

    println!("Value for key 2: {}", table.get(2)?);

    table.remove(2);
    print!("{}", table);

    let n = 114514;
    let base = 1_000;

    for i in base..base + n {
        table.insert(i, i * 2);
    }

    for i in base..base + n {
        assert_eq!(table.get(i), Ok(i * 2), "failed at {}", i);
    }
    println!("Inserted {} keys, capacity {}", table.len(), table.capacity());

    for i in base..base + n {
        table.remove(i);
    }
    println!("Removed all keys, capacity {}", table.capacity());

    Ok(())
}
