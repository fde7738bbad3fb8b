//! System cursor visibility via the X11 XFixes extension.
//!
//! `XFixesHideCursor` on the root window hides the pointer on every screen
//! for as long as the hiding client stays connected, so the guard owns its
//! own display connection. libX11 and libXfixes are loaded at runtime;
//! without them or without an X server (pure Wayland) hiding fails and the
//! cursor stays visible.

use std::fmt;
use std::os::raw::c_int;
use std::ptr::{self, NonNull};

use x11_dl::xfixes::XFixes;
use x11_dl::xlib::{Display, Xlib};

/// Shows the cursor again and disconnects when dropped.
pub struct HiddenCursor {
    xlib: Xlib,
    xfixes: XFixes,
    display: NonNull<Display>,
}

impl fmt::Debug for HiddenCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiddenCursor")
            .field("display", &self.display)
            .finish()
    }
}

pub fn hide_system_cursor() -> Result<HiddenCursor, String> {
    let xlib = Xlib::open().map_err(|e| format!("cannot load libX11: {}", e))?;
    let xfixes = XFixes::open().map_err(|e| format!("cannot load libXfixes: {}", e))?;

    // SAFETY: a null name opens the display named by $DISPLAY.
    let display = NonNull::new(unsafe { (xlib.XOpenDisplay)(ptr::null()) })
        .ok_or_else(|| "no X display to hide the cursor on".to_owned())?;

    let mut event_base: c_int = 0;
    let mut error_base: c_int = 0;
    // SAFETY: `display` is a live connection owned by this function.
    unsafe {
        let dpy = display.as_ptr();
        if (xfixes.XFixesQueryExtension)(dpy, &mut event_base, &mut error_base) == 0 {
            (xlib.XCloseDisplay)(dpy);
            return Err("X server lacks the XFixes extension".to_owned());
        }
        (xfixes.XFixesHideCursor)(dpy, (xlib.XDefaultRootWindow)(dpy));
        (xlib.XFlush)(dpy);
    }
    Ok(HiddenCursor {
        xlib,
        xfixes,
        display,
    })
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        let dpy = self.display.as_ptr();
        // SAFETY: the connection was opened in `hide_system_cursor` and is
        // closed only here.
        unsafe {
            (self.xfixes.XFixesShowCursor)(dpy, (self.xlib.XDefaultRootWindow)(dpy));
            (self.xlib.XFlush)(dpy);
            (self.xlib.XCloseDisplay)(dpy);
        }
    }
}
