// Backend API to manage event registrations and waitlists.
//
// Layout
// - modules/events: core rules, use case handlers, inbound adapters.
// - shared: cross-module primitives and infrastructure ports.
// - shell: configuration and composition root.

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod classify;
            pub mod event;
            pub mod notification;
            pub mod transition;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod notify;

            pub mod toggle_registration {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_roster {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod schedule_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod email_pocs {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod directory;
        pub mod item_store;
        pub mod notifier;
    }
}

pub mod shell;
