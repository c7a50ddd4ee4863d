/// Which way the last navigation moved.
/// Only used to pick a slide transition.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum SlideDirection {
  #[default]
  None,
  Forward,
  Backward
}

impl SlideDirection {
  pub fn as_class(self) -> &'static str {
    match self {
      | SlideDirection::None => {
        "slide-still"
      }
      | SlideDirection::Forward => {
        "slide-forward"
      }
      | SlideDirection::Backward => {
        "slide-backward"
      }
    }
  }
}

/// Position inside the pending subset.
///
/// The cursor does not hold the subset
/// itself; every call takes the current
/// length so the subset can be
/// recomputed freely between calls.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct CarouselCursor {
  index:     usize,
  direction: SlideDirection
}

impl CarouselCursor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn direction(
    &self
  ) -> SlideDirection {
    self.direction
  }

  /// Re-clamps after the subset changed
  /// size. Returns true when the index
  /// moved.
  pub fn sync(
    &mut self,
    len: usize
  ) -> bool {
    let target = if len == 0 {
      0
    } else if self.index >= len {
      len - 1
    } else {
      self.index
    };

    let moved = target != self.index;
    if moved {
      tracing::trace!(
        from = self.index,
        to = target,
        len,
        "re-clamped carousel index"
      );
    }
    self.index = target;
    moved
  }

  pub fn next(&mut self, len: usize) {
    if len == 0 {
      return;
    }
    self.direction =
      SlideDirection::Forward;
    self.index = if self.index + 1 >= len
    {
      0
    } else {
      self.index + 1
    };
  }

  pub fn previous(
    &mut self,
    len: usize
  ) {
    if len == 0 {
      return;
    }
    self.direction =
      SlideDirection::Backward;
    self.index = if self.index == 0
      || self.index >= len
    {
      len - 1
    } else {
      self.index - 1
    };
  }

  pub fn is_current(
    &self,
    position: usize
  ) -> bool {
    self.index == position
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::{
    CarouselCursor,
    SlideDirection
  };

  #[rstest]
  #[case::one(1)]
  #[case::two(2)]
  #[case::five(5)]
  fn next_n_times_returns_to_start(
    #[case] len: usize
  ) {
    let mut cursor = CarouselCursor::new();
    for _ in 0..len {
      cursor.next(len);
    }
    assert_eq!(cursor.index(), 0);
  }

  #[rstest]
  #[case::one(1)]
  #[case::three(3)]
  #[case::seven(7)]
  fn previous_from_start_lands_on_last(
    #[case] len: usize
  ) {
    let mut cursor = CarouselCursor::new();
    cursor.previous(len);
    assert_eq!(cursor.index(), len - 1);
    assert_eq!(
      cursor.direction(),
      SlideDirection::Backward
    );
  }

  #[test]
  fn next_from_last_wraps_to_zero() {
    let mut cursor = CarouselCursor::new();
    cursor.previous(4);
    assert_eq!(cursor.index(), 3);
    cursor.next(4);
    assert_eq!(cursor.index(), 0);
    assert_eq!(
      cursor.direction(),
      SlideDirection::Forward
    );
  }

  #[test]
  fn sync_clamps_when_subset_shrinks() {
    let mut cursor = CarouselCursor::new();
    cursor.previous(5);
    assert_eq!(cursor.index(), 4);

    assert!(cursor.sync(2));
    assert_eq!(cursor.index(), 1);

    assert!(!cursor.sync(3));
    assert_eq!(cursor.index(), 1);
  }

  #[test]
  fn sync_resets_on_empty_subset() {
    let mut cursor = CarouselCursor::new();
    cursor.next(3);
    cursor.next(3);
    assert!(cursor.sync(0));
    assert_eq!(cursor.index(), 0);
  }

  #[test]
  fn navigation_on_empty_subset_is_noop() {
    let mut cursor = CarouselCursor::new();
    cursor.next(0);
    cursor.previous(0);
    assert_eq!(
      cursor,
      CarouselCursor::new()
    );
  }

  #[test]
  fn exactly_one_position_is_current() {
    for len in 1..6 {
      let mut cursor =
        CarouselCursor::new();
      for _ in 0..(len * 2 + 1) {
        cursor.next(len);
        let current = (0..len)
          .filter(|p| {
            cursor.is_current(*p)
          })
          .count();
        assert_eq!(current, 1);
      }
    }
  }
}
