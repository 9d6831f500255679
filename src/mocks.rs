use crate::can::MessageHandler;
use crate::example::ExampleFrame;
use embedded_can::nb::Can;
use embedded_can::ErrorKind;
use mockall::mock;

mock! {
    pub Handler {}

    impl MessageHandler<ExampleFrame> for Handler {
        fn on_message(&self, frame: &ExampleFrame);
    }
}

/// Bus whose receive path always fails, for error propagation tests.
pub struct FaultyBus;

impl Can for FaultyBus {
    type Frame = ExampleFrame;
    type Error = ErrorKind;

    fn transmit(&mut self, _frame: &ExampleFrame) -> nb::Result<Option<ExampleFrame>, ErrorKind> {
        Err(nb::Error::Other(ErrorKind::Other))
    }

    fn receive(&mut self) -> nb::Result<ExampleFrame, ErrorKind> {
        Err(nb::Error::Other(ErrorKind::Other))
    }
}
