use super::{NamedSnippet, Section};
use crate::snippet::SnippetSet;

pub(super) fn snippets() -> Vec<NamedSnippet> {
    vec![
        NamedSnippet::new("rate-limiting", Section::Practices, rate_limiting()),
        NamedSnippet::new("caching", Section::Practices, caching()),
        NamedSnippet::new("error-handling", Section::Practices, error_handling()),
        NamedSnippet::new("batching", Section::Practices, batching()),
    ]
}

fn rate_limiting() -> SnippetSet {
    SnippetSet::single(
        r#"// Implement exponential backoff for rate limits
class ApiClient {
  constructor() {
    this.retryDelays = [1000, 2000, 4000, 8000]; // ms
  }
  
  async makeRequest(endpoint, options = {}, retryIndex = 0) {
    try {
      const response = await fetch(endpoint, options);
      
      if (response.status === 429) {
        if (retryIndex < this.retryDelays.length) {
          await this.delay(this.retryDelays[retryIndex]);
          return this.makeRequest(endpoint, options, retryIndex + 1);
        }
        throw new Error('Rate limit exceeded');
      }
      
      return response;
    } catch (error) {
      throw error;
    }
  }
  
  delay(ms) {
    return new Promise(resolve => setTimeout(resolve, ms));
  }
}"#,
        "javascript",
    )
    .with_title("Rate Limiting with Exponential Backoff")
}

fn caching() -> SnippetSet {
    SnippetSet::single(
        r#"// Implement intelligent caching for vehicle data
class VehicleDataCache {
  constructor() {
    this.cache = new Map();
    this.ttl = 5 * 60 * 1000; // 5 minutes
  }
  
  async getVehicleLocation(vehicleId) {
    const cacheKey = `location_${vehicleId}`;
    const cached = this.cache.get(cacheKey);
    
    if (cached && Date.now() - cached.timestamp < this.ttl) {
      return cached.data;
    }
    
    const location = await api.vehicles.getLocation(vehicleId);
    this.cache.set(cacheKey, {
      data: location,
      timestamp: Date.now()
    });
    
    return location;
  }
  
  async getVehicleStatus(vehicleId) {
    // Status data changes less frequently - longer TTL
    const cacheKey = `status_${vehicleId}`;
    const ttl = 15 * 60 * 1000; // 15 minutes
    
    const cached = this.cache.get(cacheKey);
    if (cached && Date.now() - cached.timestamp < ttl) {
      return cached.data;
    }
    
    const status = await api.vehicles.getStatus(vehicleId);
    this.cache.set(cacheKey, {
      data: status,
      timestamp: Date.now()
    });
    
    return status;
  }
}"#,
        "javascript",
    )
    .with_title("Intelligent Caching Implementation")
}

fn error_handling() -> SnippetSet {
    SnippetSet::single(
        r#"// Comprehensive error handling
class ApiErrorHandler {
  static handle(error, context = {}) {
    switch (error.status) {
      case 400:
        console.error('Bad Request:', error.message, context);
        throw new Error('Invalid request parameters');
        
      case 401:
        console.error('Unauthorized:', error.message);
        // Trigger token refresh
        return this.refreshTokenAndRetry(context);
        
      case 403:
        console.error('Forbidden:', error.message, context);
        throw new Error('Insufficient permissions');
        
      case 404:
        console.error('Not Found:', error.message, context);
        throw new Error('Vehicle not found');
        
      case 429:
        console.warn('Rate Limited:', error.message);
        // Implement backoff strategy
        return this.handleRateLimit(context);
        
      case 500:
      case 502:
      case 503:
        console.error('Server Error:', error.message);
        // Retry with exponential backoff
        return this.retryWithBackoff(context);
        
      default:
        console.error('Unknown Error:', error);
        throw error;
    }
  }
  
  static async refreshTokenAndRetry(context) {
    try {
      await auth.refreshToken();
      return context.retryOriginalRequest();
    } catch (refreshError) {
      throw new Error('Authentication failed');
    }
  }
}"#,
        "javascript",
    )
    .with_title("Comprehensive Error Handling")
}

fn batching() -> SnippetSet {
    SnippetSet::single(
        r#"// Batch multiple requests efficiently
class BatchRequestManager {
  constructor() {
    this.batchSize = 10;
    this.batchDelay = 100; // ms
    this.pendingRequests = [];
  }
  
  async getMultipleVehicleLocations(vehicleIds) {
    // Split into batches to avoid overwhelming the API
    const batches = this.chunkArray(vehicleIds, this.batchSize);
    const results = [];
    
    for (const batch of batches) {
      const batchPromises = batch.map(id => 
        this.getLocationWithRetry(id)
      );
      
      const batchResults = await Promise.allSettled(batchPromises);
      results.push(...batchResults);
      
      // Small delay between batches
      if (batches.indexOf(batch) < batches.length - 1) {
        await this.delay(this.batchDelay);
      }
    }
    
    return results;
  }
  
  chunkArray(array, size) {
    const chunks = [];
    for (let i = 0; i < array.length; i += size) {
      chunks.push(array.slice(i, i + size));
    }
    return chunks;
  }
}"#,
        "javascript",
    )
    .with_title("Efficient Batch Processing")
}
