/// Blocking user notification shown when a submission is cancelled.
///
/// In the browser this is `window.alert`.
pub trait Notifier {
    fn notify(&self, message: &str);
}
