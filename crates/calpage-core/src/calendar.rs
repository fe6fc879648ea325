use tracing::debug;

/// The calendar widget's public operations.
///
/// The handle belongs to the caller; implementations only forward to the
/// widget and report whatever it raises.
pub trait CalendarWidget {
  type Error;

  fn unselect(
    &self
  ) -> Result<(), Self::Error>;

  fn refetch_events(
    &self
  ) -> Result<(), Self::Error>;

  fn rerender_events(
    &self
  ) -> Result<(), Self::Error>;
}

/// Clears the selection, refetches events from the widget's source and
/// rerenders them. The first failing step aborts the rest.
#[tracing::instrument(skip_all)]
pub fn refresh_calendar<W>(
  widget: &W
) -> Result<(), W::Error>
where
  W: CalendarWidget + ?Sized
{
  widget.unselect()?;
  widget.refetch_events()?;
  widget.rerender_events()?;

  debug!("calendar refreshed");
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::{
    CalendarWidget,
    refresh_calendar
  };

  #[derive(Default)]
  struct RecordingWidget {
    calls:   RefCell<Vec<&'static str>>,
    fail_on: Option<&'static str>
  }

  impl RecordingWidget {
    fn record(
      &self,
      op: &'static str
    ) -> Result<(), String> {
      self.calls.borrow_mut().push(op);
      if self.fail_on == Some(op) {
        return Err(format!(
          "{op} failed: calendar not \
           initialized"
        ));
      }
      Ok(())
    }
  }

  impl CalendarWidget for RecordingWidget {
    type Error = String;

    fn unselect(
      &self
    ) -> Result<(), String> {
      self.record("unselect")
    }

    fn refetch_events(
      &self
    ) -> Result<(), String> {
      self.record("refetchEvents")
    }

    fn rerender_events(
      &self
    ) -> Result<(), String> {
      self.record("rerenderEvents")
    }
  }

  #[test]
  fn runs_three_operations_in_order() {
    let widget =
      RecordingWidget::default();

    refresh_calendar(&widget)
      .expect("refresh succeeds");

    assert_eq!(
      *widget.calls.borrow(),
      vec![
        "unselect",
        "refetchEvents",
        "rerenderEvents"
      ]
    );
  }

  #[test]
  fn failure_propagates_and_stops() {
    let widget = RecordingWidget {
      fail_on: Some("refetchEvents"),
      ..RecordingWidget::default()
    };

    let err = refresh_calendar(&widget)
      .expect_err("refetch fails");

    assert!(
      err.contains("refetchEvents")
    );
    assert_eq!(
      *widget.calls.borrow(),
      vec!["unselect", "refetchEvents"]
    );
  }

  #[test]
  fn works_through_trait_objects() {
    let widget =
      RecordingWidget::default();
    let dyn_widget: &dyn CalendarWidget<
      Error = String
    > = &widget;

    refresh_calendar(dyn_widget)
      .expect("refresh succeeds");
    assert_eq!(
      widget.calls.borrow().len(),
      3
    );
  }
}
