pub fn test_id_val() -> i64 {
  use std::sync::atomic::{AtomicI64, Ordering};
  static COUNT: AtomicI64 = AtomicI64::new(0);

  // add extra bits to make it easy to identify test IDs
  (0x7e57 << 32) | COUNT.fetch_add(1, Ordering::SeqCst)
}

#[macro_export]
macro_rules! test_id {
  ($id_type:ident) => {
    $id_type::new(swapflow_test_util::test_id_val())
  }
}
