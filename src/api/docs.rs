//! Static OpenAPI description served at `/api-docs`

use serde_json::{json, Value};

use crate::api::types::Json;

pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

fn text_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "text/plain": { "schema": { "type": "string" } } }
    })
}

fn id_user_param() -> Value {
    json!({
        "in": "path",
        "name": "id_user",
        "required": true,
        "description": "ID of the user",
        "schema": { "type": "string" }
    })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "User configuration API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Stores per-user configuration in a Firebase Realtime Database"
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            },
            "schemas": {
                "UserConfig": {
                    "type": "object",
                    "required": ["id_user", "active_status"],
                    "properties": {
                        "id_user": { "oneOf": [{ "type": "integer" }, { "type": "string" }] },
                        "active_status": { "type": "boolean" },
                        "avatar": { "type": "string" }
                    }
                }
            }
        },
        "security": [{ "bearerAuth": [] }],
        "paths": {
            "/addUser": {
                "post": {
                    "summary": "Create or overwrite a user configuration",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/UserConfig" }
                            }
                        }
                    },
                    "responses": {
                        "200": text_response("User created successfully"),
                        "400": text_response("Missing or malformed field"),
                        "500": text_response("Store failure")
                    }
                }
            },
            "/getUserConfig/{id_user}": {
                "get": {
                    "summary": "Retrieve a user configuration",
                    "parameters": [id_user_param()],
                    "responses": {
                        "200": {
                            "description": "Stored configuration",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/UserConfig" }
                                }
                            }
                        },
                        "404": text_response("User not found"),
                        "500": text_response("Store failure")
                    }
                }
            },
            "/updateActiveStatus/{id_user}/{active_status}": {
                "put": {
                    "summary": "Update the active status of a user",
                    "parameters": [
                        id_user_param(),
                        {
                            "in": "path",
                            "name": "active_status",
                            "required": true,
                            "description": "1 for true, 0 for false",
                            "schema": { "type": "integer", "minimum": 0, "maximum": 1 }
                        }
                    ],
                    "responses": {
                        "200": text_response("User active status updated successfully"),
                        "400": text_response("Unrecognized status literal"),
                        "404": text_response("User not found"),
                        "500": text_response("Store failure")
                    }
                }
            },
            "/updateAvatar/{id_user}": {
                "put": {
                    "summary": "Update the avatar URL of a user",
                    "parameters": [id_user_param()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "required": ["avatar"],
                                    "properties": { "avatar": { "type": "string" } }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": text_response("User avatar URL updated successfully"),
                        "400": text_response("Missing avatar"),
                        "404": text_response("User not found"),
                        "500": text_response("Store failure")
                    }
                }
            },
            "/login": {
                "post": {
                    "summary": "Issue a bearer token (only when authentication is enabled)",
                    "security": [],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "required": ["username", "password"],
                                    "properties": {
                                        "username": { "type": "string" },
                                        "password": { "type": "string" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Signed token and its expiry" },
                        "400": text_response("Empty credentials"),
                        "401": text_response("Credentials rejected")
                    }
                }
            }
        }
    })
}
