pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod store;
        pub mod write_locks;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
        }
        pub mod use_cases {
            pub mod manage_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_store;
                pub mod employee_store_in_memory;
            }
        }
    }

    pub mod projects {
        pub mod core {
            pub mod project;
        }
        pub mod use_cases {
            pub mod manage_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod project_store;
                pub mod project_store_in_memory;
            }
        }
    }

    pub mod time_entries {
        pub mod core {
            pub mod projection;
            pub mod query_plan;
            pub mod time_entry;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod entry_projector;
            pub mod validation;
            pub mod record_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod time_entry_store;
                pub mod time_entry_store_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures {
        pub mod commands {
            pub mod record_time_entry;
        }
        pub mod stores;
    }

    pub mod e2e {
        pub mod time_entries_flow_tests;
    }
}
