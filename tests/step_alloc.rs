use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};
use tcars::{RuleTable, Status, World, engine};

struct CountingAlloc;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|n| n.set(n.get() + 1));
        unsafe { System.alloc(layout) }
    }
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn allocations() -> usize {
    ALLOCATIONS.with(Cell::get)
}

#[test]
fn serial_steps_work_in_place() {
    let rule = RuleTable::new(777).unwrap();
    let mut world = World::new(Status::One);
    // first call registers the logging callsites
    engine::step(&mut world, &rule);

    let before = allocations();
    let mut total = 0;
    for _ in 0..100 {
        total += engine::step(&mut world, &rule);
    }
    let after = allocations();

    assert!(total > 0);
    assert_eq!(after - before, 0, "serial steps allocated");
}
