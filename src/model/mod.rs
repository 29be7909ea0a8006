/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// HTTP transport with Basic authentication
pub mod http;
/// Request bodies and queries sent to the API
pub mod requests;
/// Argument validation shared by every tool
pub mod validation;
