use leptos::*;

use super::state::use_notifications;

#[cfg(target_arch = "wasm32")]
mod socket {
    use super::super::protocol::{parse_frame, unsubscribe_frame, CHANNELS};
    use super::super::state::NotificationState;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    /// An open push socket. The callbacks live as long as the connection.
    pub struct PushConnection {
        socket: WebSocket,
        _on_message: Closure<dyn FnMut(MessageEvent)>,
        _on_close: Closure<dyn FnMut(CloseEvent)>,
    }

    impl PushConnection {
        pub fn open(url: &str, state: NotificationState) -> Result<Self, JsValue> {
            let socket = WebSocket::new(url)?;
            let sender = socket.clone();
            let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                let Some(text) = event.data().as_string() else {
                    return;
                };
                match parse_frame(&text) {
                    Ok(frame) => {
                        for reply in state.apply_frame(&frame) {
                            if let Err(err) = sender.send_with_str(&reply) {
                                log::warn!("push reply failed: {:?}", err);
                            }
                        }
                    }
                    Err(err) => log::warn!("{}", err),
                }
            });
            socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

            let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
                log::info!("push channel closed (code {})", event.code());
                state.set_disconnected();
            });
            socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

            Ok(Self {
                socket,
                _on_message: on_message,
                _on_close: on_close,
            })
        }

        pub fn close(self) {
            if self.socket.ready_state() == WebSocket::OPEN {
                for channel in CHANNELS {
                    let _ = self.socket.send_with_str(&unsubscribe_frame(channel));
                }
            }
            self.socket.set_onmessage(None);
            self.socket.set_onclose(None);
            let _ = self.socket.close();
        }
    }
}

/// Keeps a push subscription open while mounted. Renders nothing.
#[component]
pub fn NotificationListener() -> impl IntoView {
    let state = use_notifications();

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        #[derive(Default)]
        struct Slot {
            disposed: bool,
            connection: Option<socket::PushConnection>,
        }

        let slot = Rc::new(RefCell::new(Slot::default()));
        let slot_for_open = slot.clone();
        spawn_local(async move {
            let config = crate::config::push_config().await;
            let url = super::protocol::socket_url(&config);
            match socket::PushConnection::open(&url, state) {
                Ok(connection) => {
                    let mut slot = slot_for_open.borrow_mut();
                    if slot.disposed {
                        connection.close();
                    } else {
                        slot.connection = Some(connection);
                    }
                }
                Err(err) => log::error!("failed to open push channel: {:?}", err),
            }
        });
        on_cleanup(move || {
            let mut slot = slot.borrow_mut();
            slot.disposed = true;
            if let Some(connection) = slot.connection.take() {
                connection.close();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = state;

    ().into_view()
}
