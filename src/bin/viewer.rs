use druid::{AppLauncher, PlatformError, WindowDesc};

use mandelzoom::gui::widget::MandelbrotWidget;

fn main() -> Result<(), PlatformError> {
    AppLauncher::with_window(
        WindowDesc::new(MandelbrotWidget::new())
            .title("Mandelzoom")
            .window_size((600.0, 600.0)),
    )
    .launch(())?;
    Ok(())
}
